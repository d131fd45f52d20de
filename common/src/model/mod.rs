pub mod google;
pub mod response;
pub mod review;
