/// Builds a [`ParameterMap`](crate::ParameterMap) from `name => value` pairs.
///
/// Values are converted with [`ToString`], so numbers can be written
/// directly. A repeated name keeps its last value.
///
/// # Examples
///
/// ```rust
/// use text_parameters::params;
///
/// let params = params! {
///     "foo" => 3,
///     "bar" => "1.4142",
///     "baz" => "",
/// };
/// assert_eq!(params.get("foo"), "3");
/// assert_eq!(params.len(), 3);
///
/// assert!(params! {}.is_empty());
/// ```
#[macro_export]
macro_rules! params {
    () => {
        $crate::ParameterMap::new()
    };

    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut params = $crate::ParameterMap::new();
        $(
            params.set($name, ::std::string::ToString::to_string(&$value));
        )+
        params
    }};
}
