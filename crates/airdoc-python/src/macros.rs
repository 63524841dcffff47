/// Generate a frozen `#[pyclass]` struct where each field is `f64`.
///
/// Also generates a `from_core()` method that copies values from the
/// corresponding Rust struct.
macro_rules! define_scalar_result {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident from $core_type:ty {
            $($field:ident),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[pyo3::pyclass(frozen)]
        $vis struct $name {
            $(
                #[pyo3(get)]
                pub $field: f64,
            )+
        }

        impl $name {
            pub fn from_core(c: &$core_type) -> Self {
                Self {
                    $(
                        $field: c.$field,
                    )+
                }
            }
        }
    };
}

/// Copy the named scalar fields of a core struct into a `PyDict`.
macro_rules! fields_to_dict {
    ($py:expr, $s:expr, $($field:ident),+ $(,)?) => {{
        let dict = pyo3::types::PyDict::new($py);
        $(
            dict.set_item(stringify!($field), $s.$field)?;
        )+
        dict
    }};
}
