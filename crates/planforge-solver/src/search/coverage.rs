//! Coverage bookkeeping.
//!
//! Every required category and required group is assigned one bit. Each
//! catalog item gets a mask with the bits of the required tags it touches,
//! so coverage of a selection is the union of its items' masks and a
//! selection covers the catalog when every bit is set.

use fixedbitset::FixedBitSet;

use planforge_core::Catalog;

/// Bit assignment for the coverage requirements of one catalog.
#[derive(Debug, Clone)]
pub struct CoverageIndex {
    /// Mask per catalog position.
    item_masks: Vec<FixedBitSet>,
    /// Number of required tags (categories plus groups).
    required: usize,
}

impl CoverageIndex {
    /// Builds the index for a catalog.
    pub fn new(catalog: &Catalog) -> Self {
        let categories = catalog.required_categories();
        let groups = catalog.required_groups();
        let required = categories.len() + groups.len();

        let item_masks = catalog
            .items()
            .iter()
            .map(|item| {
                let mut mask = FixedBitSet::with_capacity(required);
                // BTreeSet ranks give a stable bit per tag
                if let Some(bit) = categories.iter().position(|c| c == item.category()) {
                    mask.insert(bit);
                }
                if let Some(bit) = groups.iter().position(|g| g == item.group()) {
                    mask.insert(categories.len() + bit);
                }
                mask
            })
            .collect();

        Self {
            item_masks,
            required,
        }
    }

    /// Number of required tags.
    #[inline]
    pub fn required(&self) -> usize {
        self.required
    }

    /// A mask with nothing covered.
    pub fn empty_mask(&self) -> FixedBitSet {
        FixedBitSet::with_capacity(self.required)
    }

    /// Mask of the item at a catalog position.
    #[inline]
    pub fn mask_of(&self, position: usize) -> &FixedBitSet {
        &self.item_masks[position]
    }

    /// Returns true if the mask covers every requirement.
    #[inline]
    pub fn is_complete(&self, covered: &FixedBitSet) -> bool {
        covered.count_ones(..) == self.required
    }
}
