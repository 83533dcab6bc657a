//! Solidity bindings for the two sale contracts.
//!
//! Only the functions the dashboard touches are declared.

use alloy_sol_types::sol;

sol! {
    /// Crypto Devs collectible contract (ERC-721 enumerable).
    #[allow(missing_docs)]
    interface ICryptoDevs {
        function balanceOf(address owner) external view returns (uint256);
        function tokenOfOwnerByIndex(address owner, uint256 index) external view returns (uint256);
    }

    /// Crypto Dev token contract (ERC-20 with claim and paid mint).
    #[allow(missing_docs)]
    interface ICryptoDevToken {
        function tokenIdsClaimed(uint256 tokenId) external view returns (bool);
        function balanceOf(address account) external view returns (uint256);
        function totalSupply() external view returns (uint256);
        function mint(uint256 amount) external payable;
        function claim() external;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{Address, U256};
    use alloy_sol_types::SolCall;

    #[test]
    fn test_selectors_match_erc_signatures() {
        assert_eq!(ICryptoDevs::balanceOfCall::SELECTOR, [0x70, 0xa0, 0x82, 0x31]);
        assert_eq!(ICryptoDevs::tokenOfOwnerByIndexCall::SELECTOR, [0x2f, 0x74, 0x5c, 0x59]);
        assert_eq!(ICryptoDevToken::totalSupplyCall::SELECTOR, [0x18, 0x16, 0x0d, 0xdd]);
        assert_eq!(ICryptoDevToken::claimCall::SIGNATURE, "claim()");
        assert_eq!(ICryptoDevToken::mintCall::SIGNATURE, "mint(uint256)");
    }

    #[test]
    fn test_mint_calldata_layout() {
        let data = ICryptoDevToken::mintCall {
            amount: U256::from(5u64),
        }
        .abi_encode();

        assert_eq!(data.len(), 4 + 32);
        assert_eq!(&data[..4], &ICryptoDevToken::mintCall::SELECTOR);
        assert_eq!(data[35], 5);
    }

    #[test]
    fn test_owner_lookup_calldata_layout() {
        let owner = Address::repeat_byte(0x11);
        let data = ICryptoDevs::tokenOfOwnerByIndexCall {
            owner,
            index: U256::from(2u64),
        }
        .abi_encode();

        assert_eq!(data.len(), 4 + 64);
        assert_eq!(&data[16..36], owner.as_slice());
        assert_eq!(data[67], 2);
    }
}
