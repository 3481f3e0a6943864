//! Common test utilities for cputemp-core tests

/// A small log in the decorated format `sensors` prints
pub const DECORATED_LOG: &str = "\
+61.0°C +63.0°C +50.0°C +58.0°C
+80.0°C +81.0°C +82.0°C +83.0°C
+62.0°C +64.0°C +51.0°C +59.0°C
+83.0°C +82.0°C +84.0°C +81.0°C
";

/// Render rows as a log with an explicit leading timestamp
pub fn leading_time_log(rows: &[(i64, [f64; 4])]) -> String {
    rows.iter()
        .map(|(t, v)| format!("{t} {} {} {} {}\n", v[0], v[1], v[2], v[3]))
        .collect()
}
