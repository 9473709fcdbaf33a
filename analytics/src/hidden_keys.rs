/// Registers that toggle constantly without carrying diagnostic value
/// (counters, mirrors of other registers, periodic status echoes). Hidden
/// from the rendered timeline on request; their entries are still stored.
pub const HIDDEN_KEYS: &[&str] = &[
    "#2708", "202", "2158", "22f7", "22fb", "22fc", "22fd", "22fe", "22ff", "243a", "24fb", "24fc",
    "4028", "402a", "402e", "4067", "4089", "408a", "4093", "4094", "40c4", "40c6", "4202", "4204",
    "4205", "4206", "420c", "4211", "4236", "4237", "4238", "4239", "4273", "4274", "4275", "4276",
    "4277", "4278", "4279", "427a", "427b", "427f", "428c", "42d4", "42d8", "42d9", "42e8", "42e9",
    "4401", "440e", "4423", "4424", "4426", "4427", "616d", "8001", "800d", "8010", "801a", "8032",
    "8033", "805e", "8061", "8077", "807c", "80af", "8204", "820a", "8217", "8218", "8223", "8229",
    "8236", "8237", "8238", "8239", "823b", "823d", "8247", "8248", "8249", "824b", "824c", "8254",
    "8280", "82b6", "82d9", "82db", "82ed", "840f", "8411", "8413", "8414",
];

pub fn is_hidden(key: &str) -> bool {
    HIDDEN_KEYS.contains(&key)
}
