// Example: keep rendering keys stable while a window slides over a long list.
use virtualgrid::{Entry, KeyAllocator, Keyed, recycle_keyed, visible_extent_range};

fn main() -> Result<(), virtualgrid::Error> {
    let entries: Vec<Entry> = (0..1_000u64).map(|i| Entry::new(i * 20, 20)).collect();
    let mut keys = KeyAllocator::new();
    let mut prev: Vec<Keyed<usize>> = Vec::new();

    for scroll_offset in [0u64, 30, 90, 400] {
        let indexes: Vec<usize> = match visible_extent_range(&entries, scroll_offset, 100)? {
            Some(range) => range.indices().collect(),
            None => Vec::new(),
        };
        let next = recycle_keyed(&indexes, &prev, &mut keys)?;
        let pairs: Vec<(usize, u64)> = next.iter().map(|k| (k.value, k.key)).collect();
        println!("offset={scroll_offset:>3} (index, key)={pairs:?}");
        prev = next;
    }
    println!("keys minted={:?}", keys.peek());
    Ok(())
}
