//! Solidity layouts of the ledger's burn records.

use alloy_sol_types::sol;

sol! {
    /// Local burn carrying a relayer fee.
    #[derive(Debug, PartialEq, Eq)]
    struct LocalBurnedUtxo {
        uint32 chainId;
        address owner;
        uint256 value;
        uint256 fee;
        bytes32 txHash;
    }

    /// Local burn addressed to its receiver, without a fee.
    #[derive(Debug, PartialEq, Eq)]
    struct LocalReceiverBurnedUtxo {
        uint32 chainId;
        address owner;
        uint256 value;
        bytes32 txHash;
    }

    #[derive(Debug, PartialEq, Eq)]
    struct LocalBatchBurnedUtxo {
        uint32 chainId;
        address owner;
        uint256[] tokenIds;
        uint256[] amounts;
        uint256 fee;
        bytes32 txHash;
    }

    #[derive(Debug, PartialEq, Eq)]
    struct LocalReceiverBatchBurnedUtxo {
        uint32 chainId;
        address owner;
        uint256[] tokenIds;
        uint256[] amounts;
        bytes32 txHash;
    }

    /// Burn of a ledger-native asset, identified by its UTXO.
    #[derive(Debug, PartialEq, Eq)]
    struct NativeBurnedUtxo {
        uint32 chainId;
        address owner;
        bytes32 utxoId;
        uint256 value;
    }

    #[derive(Debug, PartialEq, Eq)]
    struct NativeBatchBurnedUtxo {
        uint32 chainId;
        address owner;
        bytes32 utxoId;
        uint256[] tokenIds;
        uint256[] amounts;
    }
}
