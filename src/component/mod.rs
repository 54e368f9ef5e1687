pub mod renderer;
pub mod reservation_list;
pub mod view_state;
