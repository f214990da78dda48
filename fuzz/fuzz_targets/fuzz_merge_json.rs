#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Split the input into a base and an overlay document
    let Some(split) = data.iter().position(|&b| b == 0) else {
        return;
    };
    let (base, overlay) = (&data[..split], &data[split + 1..]);
    let (Ok(base), Ok(overlay)) = (
        serde_json::from_slice::<serde_json::Value>(base),
        serde_json::from_slice::<serde_json::Value>(overlay),
    ) else {
        return;
    };

    let merged = bactwin::deep_merge(&base, &overlay);
    if let (Some(base), Some(merged)) = (base.as_object(), merged.as_object()) {
        assert!(base.keys().all(|key| merged.contains_key(key)));
    }
});
