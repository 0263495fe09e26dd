//! Risk analytics for fixed-coupon bonds.

mod duration;

pub use duration::{
    macaulay_duration, modified_duration, payment_times, DurationResult,
};
