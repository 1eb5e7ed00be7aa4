//! HTTP route handlers, one module per domain.

pub mod astrology;
pub mod qabalah;
pub mod rituals;
pub mod tarot;
