pub mod reviews;
pub mod testimonials;
