use dioxus::prelude::*;

use ui::icons::{
    FaBars, FaBook, FaBookOpen, FaCalendarDays, FaChartColumn, FaClipboardList, FaGauge,
    FaGraduationCap, FaUserGear, FaXmark,
};
use ui::{decide, navigation, use_auth, Area, GuardDecision, Icon, LogoutButton, Page};

use crate::Route;

#[component]
pub fn MainLayout() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let route = use_route::<Route>();
    let mut sidebar_open = use_signal(|| false);

    use_effect(move || {
        if decide(Area::Protected, &auth.read()) == GuardDecision::RedirectToLogin {
            tracing::debug!("No session, redirecting to login");
            nav.replace(Route::Login {});
        }
    });

    let state = auth();
    let Some(user) = state.user() else {
        return rsx! {};
    };
    let pages = navigation(user.role);
    let sidebar_class = if sidebar_open() { "sidebar open" } else { "sidebar" };

    rsx! {
        div {
            class: "app-shell",
            header {
                class: "topbar",
                div {
                    class: "topbar-left",
                    button {
                        class: "icon-button mobile-only",
                        title: "Toggle menu",
                        onclick: move |_| sidebar_open.toggle(),
                        Icon { icon: FaBars, width: 18, height: 18 }
                    }
                    Link {
                        to: Route::Dashboard {},
                        class: "brand",
                        Icon { icon: FaGraduationCap, width: 22, height: 22 }
                        span { "AcademicMS" }
                    }
                }
                h1 { class: "topbar-title", "{route.title()}" }
                div {
                    class: "topbar-user",
                    span { class: "user-name", "{user.display_name()}" }
                    span { class: "user-role muted", "{user.role.label()}" }
                    div { class: "avatar", "{user.initial()}" }
                    LogoutButton { class: "icon-button", icon_only: true }
                }
            }

            div {
                class: "app-body",
                aside {
                    class: "{sidebar_class}",
                    div {
                        class: "sidebar-header mobile-only",
                        span { "Menu" }
                        button {
                            class: "icon-button",
                            title: "Close menu",
                            onclick: move |_| sidebar_open.set(false),
                            Icon { icon: FaXmark, width: 18, height: 18 }
                        }
                    }
                    nav {
                        class: "sidebar-nav",
                        for page in pages {
                            Link {
                                key: "{page.label()}",
                                to: Route::page(page),
                                class: "sidebar-link",
                                active_class: "active",
                                onclick: move |_| sidebar_open.set(false),
                                PageIcon { page }
                                span { "{page.label()}" }
                            }
                        }
                    }
                }

                main {
                    class: "content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn PageIcon(page: Page) -> Element {
    match page {
        Page::Dashboard => rsx! { Icon { icon: FaGauge, width: 18, height: 18 } },
        Page::Courses => rsx! { Icon { icon: FaBook, width: 18, height: 18 } },
        Page::Assignments => rsx! { Icon { icon: FaClipboardList, width: 18, height: 18 } },
        Page::Grades => rsx! { Icon { icon: FaChartColumn, width: 18, height: 18 } },
        Page::Timetable => rsx! { Icon { icon: FaCalendarDays, width: 18, height: 18 } },
        Page::CourseRegistration => rsx! { Icon { icon: FaBookOpen, width: 18, height: 18 } },
        Page::AccountManagement => rsx! { Icon { icon: FaUserGear, width: 18, height: 18 } },
        Page::CourseManagement => rsx! { Icon { icon: FaBook, width: 18, height: 18 } },
    }
}
