// On-screen widgets

pub mod button;

pub use button::Button;
