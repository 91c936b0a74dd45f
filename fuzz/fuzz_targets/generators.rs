#![no_main]

use libfuzzer_sys::fuzz_target;
use visigraph::{registry, GeneratorConfig, GraphFlags};

fuzz_target!(|data: &[u8]| {
    let Some((&flags, params)) = data.split_first() else {
        return;
    };
    let Ok(params) = std::str::from_utf8(params) else {
        return;
    };

    let config = GeneratorConfig::interactive();
    let requested = GraphFlags::from_bits_truncate(flags);
    for generator in registry::generators() {
        let accepted = generator.validate(params);
        let result = generator.generate(params, requested, &config);
        if !accepted {
            assert!(result.is_err());
        }
    }
});
