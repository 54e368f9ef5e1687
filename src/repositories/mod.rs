pub mod reservation_api;
