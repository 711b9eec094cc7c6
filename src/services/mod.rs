pub mod location;
pub mod proximity;
pub mod recommendation;
pub mod route_planner;
