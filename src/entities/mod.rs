mod comparison;
mod coordinates;
mod map_view;
mod marker;
mod photo;
mod plan;
mod route;
mod session;

pub use comparison::Comparison;
pub use coordinates::Coordinates;
pub use map_view::{MapCanvas, MapView};
pub use marker::{Marker, MarkerRole};
pub use photo::{PanelView, PhotoPreview, PhotoUpload, UploadPanel};
pub use plan::{RouteOutcome, RoutePlan, RouteQuery};
pub use route::{RouteLeg, RouteLine, TravelMode};
pub use session::Session;
