use alloy::sol_types::SolError;

use crate::deploy::StylusDeployerError;

/// Extension trait to check a failed call against a typed Solidity error.
pub trait Revert<E> {
    /// Checks that `Self` corresponds to the typed abi-encoded error
    /// `expected`.
    fn reverted_with(&self, expected: E) -> bool;
}

/// Extension trait to detect a call that reverted because the contract
/// panicked.
pub trait RustPanic {
    /// Checks that `Self` is a revert without any return data, which is how a
    /// Rust panic surfaces on Stylus.
    fn panicked(&self) -> bool;
}

impl RustPanic for alloy::contract::Error {
    fn panicked(&self) -> bool {
        let Self::TransportError(e) = self else {
            return false;
        };
        let Some(payload) = e.as_error_resp() else {
            return false;
        };

        payload.message.contains("execution reverted")
            && revert_data(self).map_or(true, |data| data.is_empty())
    }
}

impl<E: SolError> Revert<E> for alloy::contract::Error {
    fn reverted_with(&self, expected: E) -> bool {
        let expected = alloy::hex::encode(expected.abi_encode());
        revert_data(self).is_some_and(|actual| actual == expected)
    }
}

impl<E: SolError> Revert<E> for eyre::Report {
    fn reverted_with(&self, expected: E) -> bool {
        let expected = alloy::hex::encode(expected.abi_encode());

        // A reverting constructor wraps the inner error.
        if let Some(err) = StylusDeployerError::from_report(self) {
            return err.revert_data.contains(&expected);
        }

        if let Some(err) = self.downcast_ref::<alloy::contract::Error>() {
            return revert_data(err).is_some_and(|actual| actual == expected);
        }

        format!("{self:#?}").contains(&expected)
    }
}

/// Hex encoded revert data carried by a failed call, without the `0x` prefix.
fn revert_data(err: &alloy::contract::Error) -> Option<String> {
    let alloy::contract::Error::TransportError(e) = err else {
        return None;
    };

    //  ErrorResp(
    //      ErrorPayload {
    //          code: 3,
    //          message: "execution reverted",
    //          data: Some(RawValue("0x...")),
    //      },
    //  )
    let raw_value = e.as_error_resp().and_then(|payload| payload.data.clone())?;
    Some(raw_value.get().trim_matches('"').trim_start_matches("0x").to_owned())
}

#[cfg(test)]
mod tests {
    use alloy::{primitives::Address, sol};

    use super::*;

    sol! {
        error ERC20InsufficientBalance(address sender, uint256 balance, uint256 needed);
    }

    fn insufficient() -> ERC20InsufficientBalance {
        ERC20InsufficientBalance {
            sender: Address::repeat_byte(0x11),
            balance: alloy::primitives::U256::from(10),
            needed: alloy::primitives::U256::from(20),
        }
    }

    #[test]
    fn matches_constructor_revert() {
        let data = alloy::hex::encode(insufficient().abi_encode());
        let report = eyre::Report::new(StylusDeployerError {
            contract_address: Address::repeat_byte(0x22),
            revert_data: format!("deadbeef{data}"),
        });

        assert!(report.reverted_with(insufficient()));
    }

    #[test]
    fn rejects_unrelated_report() {
        let report = eyre::eyre!("connection refused");
        assert!(!report.reverted_with(insufficient()));
    }
}
