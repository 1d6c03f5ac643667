use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // A001 Branch handlers
        .route(
            "/api/branch",
            get(handlers::a001_branch::list_all).post(handlers::a001_branch::upsert),
        )
        .route(
            "/api/branch/:id",
            get(handlers::a001_branch::get_by_id).delete(handlers::a001_branch::delete),
        )
        .route(
            "/api/branch/testdata",
            post(handlers::a001_branch::insert_test_data),
        )
        // A002 Staff handlers
        .route(
            "/api/staff",
            get(handlers::a002_staff::list_all).post(handlers::a002_staff::upsert),
        )
        .route(
            "/api/staff/:id",
            get(handlers::a002_staff::get_by_id).delete(handlers::a002_staff::delete),
        )
        .route(
            "/api/staff/testdata",
            post(handlers::a002_staff::insert_test_data),
        )
        .route(
            "/api/staff/by-branch/:branch_id",
            get(handlers::a002_staff::list_by_branch),
        )
        // A003 Salon service handlers
        .route(
            "/api/salon_service",
            get(handlers::a003_salon_service::list_all).post(handlers::a003_salon_service::upsert),
        )
        .route(
            "/api/salon_service/:id",
            get(handlers::a003_salon_service::get_by_id)
                .delete(handlers::a003_salon_service::delete),
        )
        .route(
            "/api/salon_service/testdata",
            post(handlers::a003_salon_service::insert_test_data),
        )
        // A004 Product handlers
        .route(
            "/api/product",
            get(handlers::a004_product::list_all).post(handlers::a004_product::upsert),
        )
        .route(
            "/api/product/:id",
            get(handlers::a004_product::get_by_id).delete(handlers::a004_product::delete),
        )
        .route(
            "/api/product/:id/stock",
            post(handlers::a004_product::adjust_stock),
        )
        .route(
            "/api/product/testdata",
            post(handlers::a004_product::insert_test_data),
        )
        // A005 Membership handlers
        .route(
            "/api/membership",
            get(handlers::a005_membership::list_all).post(handlers::a005_membership::upsert),
        )
        .route(
            "/api/membership/:id",
            get(handlers::a005_membership::get_by_id).delete(handlers::a005_membership::delete),
        )
        .route(
            "/api/membership/:id/use-visit",
            post(handlers::a005_membership::use_visit),
        )
        .route(
            "/api/membership/:id/freeze",
            post(handlers::a005_membership::freeze),
        )
        .route(
            "/api/membership/testdata",
            post(handlers::a005_membership::insert_test_data),
        )
        // A006 Booking handlers
        .route(
            "/api/booking",
            get(handlers::a006_booking::list).post(handlers::a006_booking::upsert),
        )
        .route(
            "/api/booking/export",
            get(handlers::a006_booking::export_csv),
        )
        .route(
            "/api/booking/testdata",
            post(handlers::a006_booking::insert_test_data),
        )
        .route(
            "/api/booking/:id",
            get(handlers::a006_booking::get_by_id).delete(handlers::a006_booking::delete),
        )
        .route(
            "/api/booking/:id/status",
            post(handlers::a006_booking::change_status),
        )
        // A007 Notification handlers
        .route(
            "/api/notification",
            get(handlers::a007_notification::list_all)
                .post(handlers::a007_notification::create)
                .delete(handlers::a007_notification::clear_history),
        )
        .route(
            "/api/notification/:id",
            get(handlers::a007_notification::get_by_id)
                .delete(handlers::a007_notification::delete),
        )
        .route(
            "/api/notification/:id/send",
            post(handlers::a007_notification::send_test),
        )
        // D400 Schedule board
        .route(
            "/api/d400/schedule-board",
            get(handlers::d400_schedule_board::get_board),
        )
        .route(
            "/api/d400/hours",
            get(handlers::d400_schedule_board::get_hours)
                .put(handlers::d400_schedule_board::save_hours),
        )
        .route(
            "/api/d400/hours/range",
            post(handlers::d400_schedule_board::set_hours_range),
        )
        // Live changes
        .route("/api/changes", get(handlers::changes::snapshot))
        // Form settings
        .route(
            "/api/form-settings/:form_key",
            get(handlers::form_settings::get_settings),
        )
        .route(
            "/api/form-settings",
            post(handlers::form_settings::save_settings),
        )
        // Logs handlers
        .route(
            "/api/logs",
            get(handlers::logs::list_all)
                .post(handlers::logs::create)
                .delete(handlers::logs::clear_all),
        )
}
