//! Solidity type bindings for the exchange and ERC20 contracts
//!
//! Both ABIs are externally defined; the structs here mirror the deployed
//! contracts' argument shapes and are not owned by this crate.

#![allow(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

use alloy::sol;

sol! {
    #[sol(rpc)]
    interface IERC20 {
        function approve(address spender, uint256 value) external returns (bool);
        event Transfer(address indexed from, address indexed to, uint256 value);
    }
}

sol! {
    /// The exchange contract's swap description argument
    #[derive(Debug)]
    struct SwapDescription {
        address srcToken;
        address dstToken;
        address srcReceiver;
        address dstReceiver;
        uint256 amount;
        uint256 minReturnAmount;
        uint256 flags;
    }

    interface IExchange {
        function swap(
            address executor,
            SwapDescription calldata desc,
            bytes calldata permit,
            bytes calldata data
        ) external payable returns (uint256 returnAmount);
    }
}
