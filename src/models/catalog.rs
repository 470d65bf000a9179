/// Shared capability of every menu catalog.
///
/// A catalog is a closed enum whose variants carry fixed data. The CLI and the
/// order service only talk to catalogs through this trait, so adding a variant
/// means touching the enum and nothing else.
pub trait CatalogEntry: Copy + Sized + 'static {
    /// Every variant, in the order they are shown to the user.
    fn all() -> &'static [Self];

    /// Human readable label.
    fn description(&self) -> &'static str;

    /// Price for bases and toppings, multiplier for sizes.
    fn amount(&self) -> f64;

    /// Look up a variant by its 1-based menu index.
    fn from_index(index: usize) -> Option<Self> {
        index
            .checked_sub(1)
            .and_then(|i| Self::all().get(i))
            .copied()
    }
}
