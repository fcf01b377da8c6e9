// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Build a `Record` from `field => value` pairs.
///
/// ```
/// use robot_guide::record;
/// let r = record! { "Name" => "RoboX", "Manufacturer" => "AcmeCo" };
/// assert_eq!(r.get("Name"), Some("RoboX"));
/// ```
#[macro_export]
macro_rules! record {
    () => {
        $crate::record::Record::default()
    };
    ($($field:expr => $value:expr),+ $(,)?) => {{
        let mut r = $crate::record::Record::default();
        $(
            r.insert($field, $value);
        )+
        r
    }};
}
