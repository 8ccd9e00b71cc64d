mod compass_route;
mod root_route;

pub use compass_route::CompassRoute;
pub use root_route::RootRoute;
