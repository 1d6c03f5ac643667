pub mod common;

pub mod a001_branch;
pub mod a002_staff;
pub mod a003_salon_service;
pub mod a004_product;
pub mod a005_membership;
pub mod a006_booking;
pub mod a007_notification;
