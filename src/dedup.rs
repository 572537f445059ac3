//! Key deduplication across layered key/value lists.
//!
//! A log line combines several layers of entries - accumulated logger
//! context first, per-call arguments last - and later layers take precedence
//! when a key occurs more than once. Dropping the losing entries happens
//! here, before formatting, so each key appears at most once in the final
//! line while every surviving layer keeps its original order.

use std::collections::HashSet;

use crate::value::Value;

/// Remove key collisions across layers, later layers winning.
///
/// Layers are processed from last to first while one shared claimed-key set
/// spans the whole pass. Within a layer the scan starts at the pairing
/// boundary `len - 2 + (len % 2)` and walks toward the front two entries at
/// a time; a key already claimed by a later layer is dropped together with
/// its value, otherwise the pair is claimed and reinserted at the front of
/// the layer's output to preserve the original relative order.
///
/// The unpaired tail entry of an odd-length layer sits exactly on the
/// pairing boundary: it claims its key like any complete pair but carries no
/// value, so when kept it is reinserted alone and the layer stays odd for
/// the formatter's placeholder rule.
///
/// The claimed-key set lives only for a single invocation. Keys are
/// compared by their bare rendered text.
pub(crate) fn trim_duplicates(layers: &[&[Value]]) -> Vec<Vec<Value>> {
    let mut claimed: HashSet<String> = HashSet::new();
    let mut outs: Vec<Vec<Value>> = vec![Vec::new(); layers.len()];
    for (slot, layer) in layers.iter().enumerate().rev() {
        let len = layer.len() as isize;
        let mut idx = len - 2 + (len % 2);
        while idx >= 0 {
            let at = idx as usize;
            if claimed.insert(layer[at].to_string()) {
                if at + 1 < layer.len() {
                    outs[slot].insert(0, layer[at + 1].clone());
                }
                outs[slot].insert(0, layer[at].clone());
            }
            idx -= 2;
        }
    }
    outs
}
