pub mod booking_status;
pub mod membership_tier;
pub mod notification_channel;
pub mod payment_method;
