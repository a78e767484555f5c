use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::key::{KeySet, RecycleValue, ValueMap};
use crate::{Error, ItemKey, Keyed};

/// Monotonic source of fresh keys for [`recycle_items`].
///
/// The allocator is owned by the caller and threaded through every call, so the recycler itself
/// stays free of hidden state. It never hands out a key it has already handed out or observed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyAllocator {
    next: Option<ItemKey>, // `None` once `ItemKey::MAX` has been used
}

impl KeyAllocator {
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    pub fn starting_at(first: ItemKey) -> Self {
        Self { next: Some(first) }
    }

    /// The key the next [`Self::mint`] would return.
    pub fn peek(&self) -> Option<ItemKey> {
        self.next
    }

    /// Records `key` as taken, so minting continues strictly above it.
    pub fn observe(&mut self, key: ItemKey) {
        if self.next.is_some_and(|next| key >= next) {
            self.next = key.checked_add(1);
        }
    }

    pub fn mint(&mut self) -> Result<ItemKey, Error> {
        let key = self.next.ok_or(Error::KeysExhausted)?;
        self.next = key.checked_add(1);
        Ok(key)
    }
}

impl Default for KeyAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// Annotates `items` with keys, reusing the keys of `prev_items` as much as possible.
///
/// Works in two passes over `items`, in display order:
///
/// 1. *Match*: each item claims the key of the leftmost not-yet-claimed previous item whose value
///    is equal. With duplicate values this pairs the n-th equal item with the n-th equal previous
///    item.
/// 2. *Recycle*: items left without a key take the keys of unclaimed previous items, in their
///    original order. Once those run out, keys are minted from `keys`, which first observes every
///    previous key so a minted key can never collide with one.
///
/// The output has one record per item, in the same order, built by `to_recycled_item`, and all of
/// its keys are distinct. Feeding the output back as the next call's `prev_items` keeps the key
/// of every value that survives the refresh.
///
/// Values are looked up in a `HashMap` with `feature = "std"` and must be `Hash + Eq`; without
/// `std` they go into a `BTreeMap` and must be `Ord` instead. Value types meant to work in both
/// configurations should implement all of `Hash`, `Eq` and `Ord`.
///
/// # Errors
///
/// - [`Error::DuplicateKey`] when two previous items carry the same key.
/// - [`Error::KeysExhausted`] when a fresh key is needed and `keys` has none left.
pub fn recycle_items<T, R, V>(
    items: &[T],
    prev_items: &[R],
    keys: &mut KeyAllocator,
    get_value: impl Fn(&T) -> V,
    get_prev_value: impl Fn(&R) -> V,
    get_key: impl Fn(&R) -> ItemKey,
    mut to_recycled_item: impl FnMut(&T, ItemKey) -> R,
) -> Result<Vec<R>, Error>
where
    V: RecycleValue,
{
    vtrace!(
        items = items.len(),
        prev_items = prev_items.len(),
        "recycle_items"
    );

    let mut seen = KeySet::new();
    let mut prev_keys = Vec::with_capacity(prev_items.len());
    // Previous indices per value, leftmost first.
    let mut by_value: ValueMap<V, VecDeque<usize>> = ValueMap::new();
    for (index, prev) in prev_items.iter().enumerate() {
        let key = get_key(prev);
        if !seen.insert(key) {
            vwarn!(key, index, "recycle_items: duplicate key in previous items");
            return Err(Error::DuplicateKey { key });
        }
        keys.observe(key);
        prev_keys.push(key);
        by_value
            .entry(get_prev_value(prev))
            .or_default()
            .push_back(index);
    }

    let mut claimed = alloc::vec![false; prev_items.len()];
    let matched: Vec<Option<ItemKey>> = items
        .iter()
        .map(|item| {
            let index = by_value
                .get_mut(&get_value(item))
                .and_then(VecDeque::pop_front)?;
            claimed[index] = true;
            Some(prev_keys[index])
        })
        .collect();

    let mut freed = prev_keys
        .iter()
        .zip(&claimed)
        .filter(|&(_, &taken)| !taken)
        .map(|(&key, _)| key);

    let mut out = Vec::with_capacity(items.len());
    for (item, key) in items.iter().zip(matched) {
        let key = match key.or_else(|| freed.next()) {
            Some(key) => key,
            None => {
                let key = keys.mint()?;
                vdebug!(key, "recycle_items: freed keys exhausted, minted a new one");
                key
            }
        };
        out.push(to_recycled_item(item, key));
    }
    Ok(out)
}

/// [`recycle_items`] for the common case where the item itself is the compared value.
pub fn recycle_keyed<T>(
    items: &[T],
    prev_items: &[Keyed<T>],
    keys: &mut KeyAllocator,
) -> Result<Vec<Keyed<T>>, Error>
where
    T: RecycleValue + Clone,
{
    recycle_items(
        items,
        prev_items,
        keys,
        |item| item.clone(),
        |prev| prev.value.clone(),
        |prev| prev.key,
        |item, key| Keyed::new(key, item.clone()),
    )
}
