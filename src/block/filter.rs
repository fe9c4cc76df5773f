use ahash::AHashMap;

use super::Block;

/// Keep one block per column: for every `(x, y)` rounded to the nearest
/// integer, the block with the greatest `centroid_z` survives. Blocks
/// without a full centroid are dropped. Output keeps first-seen column order.
pub fn filter_top_elevation(blocks: Vec<Block>) -> Vec<Block> {
    let mut columns: AHashMap<(i64, i64), usize> = AHashMap::new();
    let mut top: Vec<Block> = Vec::new();

    for block in blocks {
        let Some([x, y, z]) = block.centroid() else { continue };
        let key = (x.round() as i64, y.round() as i64);

        match columns.get(&key) {
            Some(&idx) => {
                if top[idx].centroid_z.is_some_and(|current| z > current) { top[idx] = block }
            }
            None => {
                columns.insert(key, top.len());
                top.push(block);
            }
        }
    }

    top
}
