use alloy::{
    primitives::{Address, U256},
    sol_types::{SolType, SolValue},
};

/// Constructor data passed to `cargo stylus deploy`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Constructor {
    /// Constructor signature, e.g. `constructor(string,string,uint256)`.
    pub signature: String,
    /// Constructor arguments, one string per parameter.
    pub args: Vec<String>,
}

/// Helper trait to render an argument the way `cargo stylus` parses it.
pub trait AbiTypeToString {
    /// Stringify ABI value.
    fn abi_type_to_string(&self) -> String;
}

macro_rules! impl_to_arg_string {
    ($($abi_type:ident),* $(,)?) => {$(
        impl AbiTypeToString for $abi_type {
            fn abi_type_to_string(&self) -> String {
                self.to_string()
            }
        }
    )*};
}

impl_to_arg_string!(U256, u64, String, Address, bool);

/// Solidity type name of `value`, e.g. `uint256` for [`U256`].
#[must_use]
pub fn sol_type_name<T: SolValue>(_value: &T) -> &'static str {
    <T::SolType as SolType>::SOL_NAME
}

/// Builds a [`Constructor`] from its arguments, deriving the signature from
/// their Solidity types.
///
/// # Examples
///
/// ```rust,ignore
/// let ctr = constructor!("Test Token".to_string(), "TEST".to_string(), supply);
/// assert_eq!(ctr.signature, "constructor(string,string,uint256)");
/// ```
#[macro_export]
macro_rules! constructor {
    () => {{
        $crate::Constructor {
            signature: "constructor()".to_string(),
            args: vec![],
        }
    }};

    ($first:expr $(, $rest:expr)* $(,)?) => {{
        let params = [
            $crate::sol_type_name(&$first)
            $(, $crate::sol_type_name(&$rest))*
        ];

        $crate::Constructor {
            signature: format!("constructor({})", params.join(",")),
            args: vec![
                $crate::AbiTypeToString::abi_type_to_string(&$first)
                $(, $crate::AbiTypeToString::abi_type_to_string(&$rest))*
            ],
        }
    }};
}
