pub mod link_receive;
pub mod link_transmit;
pub mod resources;
pub mod robot_loop;
