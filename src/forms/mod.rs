pub mod payment;
pub mod work;
