use dioxus::prelude::*;

use store::ClientConfig;
use ui::AuthProvider;
use views::{
    AccountManagement, AssignmentDetail, Assignments, AuthLayout, CourseDetail, CourseManagement,
    CourseRegistration, Courses, Dashboard, Grades, Login, MainLayout, MaterialDetail, NotFound,
    NoticeDetail, Register, Timetable,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AuthLayout)]
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
    #[end_layout]
    #[layout(MainLayout)]
        #[route("/")]
        Root {},
        #[route("/dashboard")]
        Dashboard {},
        #[route("/courses")]
        Courses {},
        #[route("/courses/:class_id")]
        CourseDetail { class_id: i64 },
        #[route("/courses/:class_id/notices/:post_id")]
        NoticeDetail { class_id: i64, post_id: i64 },
        #[route("/courses/:class_id/materials/:post_id")]
        MaterialDetail { class_id: i64, post_id: i64 },
        #[route("/courses/:class_id/assignments/:post_id")]
        AssignmentDetail { class_id: i64, post_id: i64 },
        #[route("/assignments")]
        Assignments {},
        #[route("/grades")]
        Grades {},
        #[route("/timetable")]
        Timetable {},
        #[route("/course-registration")]
        CourseRegistration {},
        #[route("/account-management")]
        AccountManagement {},
        #[route("/course-management")]
        CourseManagement {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// Sidebar destination of a page.
    fn page(page: ui::Page) -> Route {
        match page {
            ui::Page::Dashboard => Route::Dashboard {},
            ui::Page::Courses => Route::Courses {},
            ui::Page::Assignments => Route::Assignments {},
            ui::Page::Grades => Route::Grades {},
            ui::Page::Timetable => Route::Timetable {},
            ui::Page::CourseRegistration => Route::CourseRegistration {},
            ui::Page::AccountManagement => Route::AccountManagement {},
            ui::Page::CourseManagement => Route::CourseManagement {},
        }
    }

    /// Detail page of a post on one of the course boards.
    fn post(kind: api::models::PostKind, class_id: i64, post_id: i64) -> Route {
        use api::models::PostKind;
        match kind {
            PostKind::Notice => Route::NoticeDetail { class_id, post_id },
            PostKind::Material => Route::MaterialDetail { class_id, post_id },
            PostKind::Assignment => Route::AssignmentDetail { class_id, post_id },
        }
    }

    /// Heading shown in the top bar.
    fn title(&self) -> &'static str {
        match self {
            Route::Login {} => "Sign in",
            Route::Register {} => "Create account",
            Route::Root {} | Route::Dashboard {} => "Dashboard",
            Route::Courses {} => "My Courses",
            Route::CourseDetail { .. } => "Course",
            Route::NoticeDetail { .. } => "Notice",
            Route::MaterialDetail { .. } => "Course material",
            Route::AssignmentDetail { .. } => "Assignment",
            Route::Assignments {} => "Assignments",
            Route::Grades {} => "Grades",
            Route::Timetable {} => "Timetable",
            Route::CourseRegistration {} => "Course Registration",
            Route::AccountManagement {} => "Account Management",
            Route::CourseManagement {} => "Course Management",
            Route::NotFound { .. } => "Not found",
        }
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    // Routes `tracing` output to the browser console.
    let level = if cfg!(debug_assertions) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    if let Err(e) = dioxus::logger::init(level) {
        eprintln!("Failed to initialize logging: {e}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| {
        let config = ClientConfig::from_build_env();
        tracing::info!("Using backend at {}", config.api.base_url);
        config
    });

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Title { "AcademicMS" }

        AuthProvider {
            config,
            Router::<Route> {}
        }
    }
}

/// Redirect `/` to `/dashboard`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Dashboard {});
    rsx! {}
}
