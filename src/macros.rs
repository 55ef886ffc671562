//! Macros for building records inline.

/// Build a [`Record`](crate::Record) from `name => value` pairs.
///
/// Values go through [`Value::from`](crate::Value), so string slices,
/// integers, floats, booleans and options are all accepted.
///
/// # Example
///
/// ```
/// use multiformat::{record, Value};
///
/// let record = record! {
///     "name" => "John",
///     "age" => 30,
///     "city" => "NYC",
/// };
///
/// assert_eq!(record.len(), 3);
/// assert_eq!(record.get("age"), Some(&Value::Integer(30)));
/// ```
#[macro_export]
macro_rules! record {
    () => {
        $crate::Record::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut record = $crate::Record::new();
        $(
            record.insert($name, $value);
        )+
        record
    }};
}
