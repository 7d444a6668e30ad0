/// Builds a [`DriverRegistry`](crate::runtime::registry::DriverRegistry)
/// from driver modules grouped by category title. Each module must expose
/// `DRIVER_CONFIG` and `run`.
///
/// ```ignore
/// let registry = register_drivers! {
///     "Elementary" => [insertion, bubble],
///     "Divide and conquer" => [merge],
/// }?;
/// ```
#[macro_export]
macro_rules! register_drivers {
    (
        $(
            $title:literal => [$($module:ident),* $(,)?]
        ),+ $(,)?
    ) => {{
        let mut __registry =
            $crate::runtime::registry::DriverRegistry::new();
        let mut __result: Result<(), String> = Ok(());

        $(
            if __result.is_ok() {
                __result = __registry.add_category(
                    $title,
                    &[$(
                        $crate::runtime::registry::DriverEntry {
                            config: &$module::DRIVER_CONFIG,
                            run: $module::run,
                        }
                    ),*],
                );
            }
        )+

        __result.map(|()| __registry)
    }};
}
