//! Input checks that run before any chain access.
//!
//! Rules are applied in a fixed order and the first failing one decides the
//! reason. Nothing here performs I/O; the only collaborator call is reading the
//! chain id the client is bound to.

use alloy::primitives::Address;

use crate::chains;
use crate::types::BridgeParams;

const INVALID_ADDRESS_FORMAT: &str = "Invalid address format";
const ZERO_ADDRESS: &str = "Address cannot be zero address";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid { reason: String },
}

impl ValidationResult {
    fn invalid(reason: impl Into<String>) -> Self {
        ValidationResult::Invalid { reason: reason.into() }
    }

    #[cfg(test)]
    pub(crate) fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }
}

pub fn validate(params: &BridgeParams) -> ValidationResult {
    if params.amount.is_zero() {
        return ValidationResult::invalid("Amount must be greater than zero");
    }

    match params.client.chain_id() {
        None => return ValidationResult::invalid("Chain ID is required"),
        Some(id) if !chains::is_supported_source(id) => {
            return ValidationResult::invalid(format!("Chain ID {id} is not supported."));
        }
        Some(_) => {}
    }

    if let Err(reason) = parse_address(&params.from_address) {
        return ValidationResult::invalid(format!("From address: {reason}"));
    }
    if let Err(reason) = parse_address(&params.to_address) {
        return ValidationResult::invalid(format!("To address: {reason}"));
    }

    ValidationResult::Valid
}

/// Parses a `0x`-prefixed, 40 hex digit, non-zero address.
///
/// Single-case input is taken as is. Mixed-case input has to carry a valid
/// EIP-55 checksum.
pub fn parse_address(input: &str) -> Result<Address, &'static str> {
    let digits = input.strip_prefix("0x").ok_or(INVALID_ADDRESS_FORMAT)?;
    if digits.len() != 40 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(INVALID_ADDRESS_FORMAT);
    }

    let has_lower = digits.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = digits.chars().any(|c| c.is_ascii_uppercase());
    let address = if has_lower && has_upper {
        Address::parse_checksummed(input, None).map_err(|_| INVALID_ADDRESS_FORMAT)?
    } else {
        input.parse::<Address>().map_err(|_| INVALID_ADDRESS_FORMAT)?
    };

    if address == Address::ZERO {
        return Err(ZERO_ADDRESS);
    }
    Ok(address)
}
