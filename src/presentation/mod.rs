mod form;
mod pagination;

pub use form::{ADD_ROW_CLASS, FormView, ingredient_row_markup};
pub use pagination::PaginationView;

use crate::markup::Markup;
use crate::surface::Region;

/// Rendering capability each component implements.
///
/// There is no shared base behavior to inherit. A component is a pure
/// projection of its state into markup plus the region it mounts into;
/// hosts wire event handlers separately.
pub trait View {
    type State;

    fn render(&self, state: &Self::State) -> Markup;

    fn region(&self) -> Region;
}
