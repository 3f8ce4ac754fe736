//! Cosmos SDK wire types (v0.45 line, as run by Akash mainnet)

pub mod base {
    pub mod v1beta1 {
        /// Coin defines a token with a denomination and an amount.
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct Coin {
            #[prost(string, tag = "1")]
            pub denom: ::prost::alloc::string::String,
            #[prost(string, tag = "2")]
            pub amount: ::prost::alloc::string::String,
        }
        /// DecCoin defines a token with a denomination and a decimal amount.
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct DecCoin {
            #[prost(string, tag = "1")]
            pub denom: ::prost::alloc::string::String,
            #[prost(string, tag = "2")]
            pub amount: ::prost::alloc::string::String,
        }
    }
}

pub mod crypto {
    pub mod secp256k1 {
        /// Compressed (33 byte) secp256k1 public key.
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct PubKey {
            #[prost(bytes = "vec", tag = "1")]
            pub key: ::prost::alloc::vec::Vec<u8>,
        }
    }
    pub mod multisig {
        /// LegacyAminoPubKey specifies a public key type which nests multiple
        /// public keys and a threshold.
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct LegacyAminoPubKey {
            #[prost(uint32, tag = "1")]
            pub threshold: u32,
            #[prost(message, repeated, tag = "2")]
            pub public_keys: ::prost::alloc::vec::Vec<::prost_types::Any>,
        }
        /// CompactBitArray is a space efficient bit array.
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct CompactBitArray {
            #[prost(uint32, tag = "1")]
            pub extra_bits_stored: u32,
            #[prost(bytes = "vec", tag = "2")]
            pub elems: ::prost::alloc::vec::Vec<u8>,
        }
    }
}

pub mod tx {
    pub mod v1beta1 {
        use super::super::base::v1beta1::Coin;
        use super::super::crypto::multisig::CompactBitArray;

        /// TxRaw is the signed transaction envelope as stored on chain.
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct TxRaw {
            #[prost(bytes = "vec", tag = "1")]
            pub body_bytes: ::prost::alloc::vec::Vec<u8>,
            #[prost(bytes = "vec", tag = "2")]
            pub auth_info_bytes: ::prost::alloc::vec::Vec<u8>,
            #[prost(bytes = "vec", repeated, tag = "3")]
            pub signatures: ::prost::alloc::vec::Vec<::prost::alloc::vec::Vec<u8>>,
        }
        /// TxBody is the body of a transaction that all signers sign over.
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct TxBody {
            #[prost(message, repeated, tag = "1")]
            pub messages: ::prost::alloc::vec::Vec<::prost_types::Any>,
            #[prost(string, tag = "2")]
            pub memo: ::prost::alloc::string::String,
            #[prost(uint64, tag = "3")]
            pub timeout_height: u64,
            #[prost(message, repeated, tag = "1023")]
            pub extension_options: ::prost::alloc::vec::Vec<::prost_types::Any>,
            #[prost(message, repeated, tag = "2047")]
            pub non_critical_extension_options: ::prost::alloc::vec::Vec<::prost_types::Any>,
        }
        /// AuthInfo describes the fee and signer modes that are used to sign a
        /// transaction.
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct AuthInfo {
            #[prost(message, repeated, tag = "1")]
            pub signer_infos: ::prost::alloc::vec::Vec<SignerInfo>,
            #[prost(message, optional, tag = "2")]
            pub fee: ::core::option::Option<Fee>,
        }
        /// SignerInfo describes the public key and signing mode of a single
        /// top-level signer.
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct SignerInfo {
            #[prost(message, optional, tag = "1")]
            pub public_key: ::core::option::Option<::prost_types::Any>,
            #[prost(message, optional, tag = "2")]
            pub mode_info: ::core::option::Option<ModeInfo>,
            #[prost(uint64, tag = "3")]
            pub sequence: u64,
        }
        /// ModeInfo describes the signing mode of a single or nested multisig
        /// signer.
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct ModeInfo {
            #[prost(oneof = "mode_info::Sum", tags = "1, 2")]
            pub sum: ::core::option::Option<mode_info::Sum>,
        }
        pub mod mode_info {
            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct Single {
                #[prost(int32, tag = "1")]
                pub mode: i32,
            }
            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct Multi {
                #[prost(message, optional, tag = "1")]
                pub bitarray: ::core::option::Option<super::CompactBitArray>,
                #[prost(message, repeated, tag = "2")]
                pub mode_infos: ::prost::alloc::vec::Vec<super::ModeInfo>,
            }
            #[derive(Clone, PartialEq, ::prost::Oneof)]
            pub enum Sum {
                #[prost(message, tag = "1")]
                Single(Single),
                #[prost(message, tag = "2")]
                Multi(Multi),
            }
        }
        /// Fee includes the amount of coins paid in fees and the maximum gas
        /// to be used by the transaction.
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct Fee {
            #[prost(message, repeated, tag = "1")]
            pub amount: ::prost::alloc::vec::Vec<Coin>,
            #[prost(uint64, tag = "2")]
            pub gas_limit: u64,
            #[prost(string, tag = "3")]
            pub payer: ::prost::alloc::string::String,
            #[prost(string, tag = "4")]
            pub granter: ::prost::alloc::string::String,
        }
    }
}

pub mod bank {
    pub mod v1beta1 {
        use super::super::base::v1beta1::Coin;

        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct MsgSend {
            #[prost(string, tag = "1")]
            pub from_address: ::prost::alloc::string::String,
            #[prost(string, tag = "2")]
            pub to_address: ::prost::alloc::string::String,
            #[prost(message, repeated, tag = "3")]
            pub amount: ::prost::alloc::vec::Vec<Coin>,
        }
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct Input {
            #[prost(string, tag = "1")]
            pub address: ::prost::alloc::string::String,
            #[prost(message, repeated, tag = "2")]
            pub coins: ::prost::alloc::vec::Vec<Coin>,
        }
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct Output {
            #[prost(string, tag = "1")]
            pub address: ::prost::alloc::string::String,
            #[prost(message, repeated, tag = "2")]
            pub coins: ::prost::alloc::vec::Vec<Coin>,
        }
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct MsgMultiSend {
            #[prost(message, repeated, tag = "1")]
            pub inputs: ::prost::alloc::vec::Vec<Input>,
            #[prost(message, repeated, tag = "2")]
            pub outputs: ::prost::alloc::vec::Vec<Output>,
        }
    }
}

pub mod staking {
    pub mod v1beta1 {
        use super::super::base::v1beta1::Coin;

        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct MsgDelegate {
            #[prost(string, tag = "1")]
            pub delegator_address: ::prost::alloc::string::String,
            #[prost(string, tag = "2")]
            pub validator_address: ::prost::alloc::string::String,
            #[prost(message, optional, tag = "3")]
            pub amount: ::core::option::Option<Coin>,
        }
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct MsgUndelegate {
            #[prost(string, tag = "1")]
            pub delegator_address: ::prost::alloc::string::String,
            #[prost(string, tag = "2")]
            pub validator_address: ::prost::alloc::string::String,
            #[prost(message, optional, tag = "3")]
            pub amount: ::core::option::Option<Coin>,
        }
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct MsgBeginRedelegate {
            #[prost(string, tag = "1")]
            pub delegator_address: ::prost::alloc::string::String,
            #[prost(string, tag = "2")]
            pub validator_src_address: ::prost::alloc::string::String,
            #[prost(string, tag = "3")]
            pub validator_dst_address: ::prost::alloc::string::String,
            #[prost(message, optional, tag = "4")]
            pub amount: ::core::option::Option<Coin>,
        }
    }
}

pub mod distribution {
    pub mod v1beta1 {
        use super::super::base::v1beta1::Coin;

        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct MsgWithdrawDelegatorReward {
            #[prost(string, tag = "1")]
            pub delegator_address: ::prost::alloc::string::String,
            #[prost(string, tag = "2")]
            pub validator_address: ::prost::alloc::string::String,
        }
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct MsgWithdrawValidatorCommission {
            #[prost(string, tag = "1")]
            pub validator_address: ::prost::alloc::string::String,
        }
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct MsgSetWithdrawAddress {
            #[prost(string, tag = "1")]
            pub delegator_address: ::prost::alloc::string::String,
            #[prost(string, tag = "2")]
            pub withdraw_address: ::prost::alloc::string::String,
        }
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct MsgFundCommunityPool {
            #[prost(message, repeated, tag = "1")]
            pub amount: ::prost::alloc::vec::Vec<Coin>,
            #[prost(string, tag = "2")]
            pub depositor: ::prost::alloc::string::String,
        }
        /// CommunityPoolSpendProposal details a proposal for the use of
        /// community funds.
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct CommunityPoolSpendProposal {
            #[prost(string, tag = "1")]
            pub title: ::prost::alloc::string::String,
            #[prost(string, tag = "2")]
            pub description: ::prost::alloc::string::String,
            #[prost(string, tag = "3")]
            pub recipient: ::prost::alloc::string::String,
            #[prost(message, repeated, tag = "4")]
            pub amount: ::prost::alloc::vec::Vec<Coin>,
        }
    }
}

pub mod gov {
    pub mod v1beta1 {
        use super::super::base::v1beta1::Coin;

        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct MsgSubmitProposal {
            #[prost(message, optional, tag = "1")]
            pub content: ::core::option::Option<::prost_types::Any>,
            #[prost(message, repeated, tag = "2")]
            pub initial_deposit: ::prost::alloc::vec::Vec<Coin>,
            #[prost(string, tag = "3")]
            pub proposer: ::prost::alloc::string::String,
        }
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct MsgVote {
            #[prost(uint64, tag = "1")]
            pub proposal_id: u64,
            #[prost(string, tag = "2")]
            pub voter: ::prost::alloc::string::String,
            #[prost(int32, tag = "3")]
            pub option: i32,
        }
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct MsgDeposit {
            #[prost(uint64, tag = "1")]
            pub proposal_id: u64,
            #[prost(string, tag = "2")]
            pub depositor: ::prost::alloc::string::String,
            #[prost(message, repeated, tag = "3")]
            pub amount: ::prost::alloc::vec::Vec<Coin>,
        }
        /// TextProposal defines a standard text proposal whose changes need to be
        /// manually updated in case of approval.
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct TextProposal {
            #[prost(string, tag = "1")]
            pub title: ::prost::alloc::string::String,
            #[prost(string, tag = "2")]
            pub description: ::prost::alloc::string::String,
        }
    }
}

pub mod slashing {
    pub mod v1beta1 {
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct MsgUnjail {
            #[prost(string, tag = "1")]
            pub validator_addr: ::prost::alloc::string::String,
        }
    }
}

pub mod params {
    pub mod v1beta1 {
        /// ParameterChangeProposal defines a proposal to change one or more
        /// parameters.
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct ParameterChangeProposal {
            #[prost(string, tag = "1")]
            pub title: ::prost::alloc::string::String,
            #[prost(string, tag = "2")]
            pub description: ::prost::alloc::string::String,
            #[prost(message, repeated, tag = "3")]
            pub changes: ::prost::alloc::vec::Vec<ParamChange>,
        }
        /// ParamChange defines an individual parameter change.
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct ParamChange {
            #[prost(string, tag = "1")]
            pub subspace: ::prost::alloc::string::String,
            #[prost(string, tag = "2")]
            pub key: ::prost::alloc::string::String,
            #[prost(string, tag = "3")]
            pub value: ::prost::alloc::string::String,
        }
    }
}

pub mod upgrade {
    pub mod v1beta1 {
        /// Plan specifies information about a planned upgrade and when it should
        /// occur.
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct Plan {
            #[prost(string, tag = "1")]
            pub name: ::prost::alloc::string::String,
            #[prost(message, optional, tag = "2")]
            pub time: ::core::option::Option<::prost_types::Timestamp>,
            #[prost(int64, tag = "3")]
            pub height: i64,
            #[prost(string, tag = "4")]
            pub info: ::prost::alloc::string::String,
        }
        /// SoftwareUpgradeProposal is a gov Content type for initiating a software
        /// upgrade.
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct SoftwareUpgradeProposal {
            #[prost(string, tag = "1")]
            pub title: ::prost::alloc::string::String,
            #[prost(string, tag = "2")]
            pub description: ::prost::alloc::string::String,
            #[prost(message, optional, tag = "3")]
            pub plan: ::core::option::Option<Plan>,
        }
    }
}

super::impl_type_url! {
    crypto::secp256k1::PubKey => "/cosmos.crypto.secp256k1.PubKey",
    crypto::multisig::LegacyAminoPubKey => "/cosmos.crypto.multisig.LegacyAminoPubKey",
    bank::v1beta1::MsgSend => "/cosmos.bank.v1beta1.MsgSend",
    bank::v1beta1::MsgMultiSend => "/cosmos.bank.v1beta1.MsgMultiSend",
    staking::v1beta1::MsgDelegate => "/cosmos.staking.v1beta1.MsgDelegate",
    staking::v1beta1::MsgUndelegate => "/cosmos.staking.v1beta1.MsgUndelegate",
    staking::v1beta1::MsgBeginRedelegate => "/cosmos.staking.v1beta1.MsgBeginRedelegate",
    distribution::v1beta1::MsgWithdrawDelegatorReward => "/cosmos.distribution.v1beta1.MsgWithdrawDelegatorReward",
    distribution::v1beta1::MsgWithdrawValidatorCommission => "/cosmos.distribution.v1beta1.MsgWithdrawValidatorCommission",
    distribution::v1beta1::MsgSetWithdrawAddress => "/cosmos.distribution.v1beta1.MsgSetWithdrawAddress",
    distribution::v1beta1::MsgFundCommunityPool => "/cosmos.distribution.v1beta1.MsgFundCommunityPool",
    distribution::v1beta1::CommunityPoolSpendProposal => "/cosmos.distribution.v1beta1.CommunityPoolSpendProposal",
    gov::v1beta1::MsgSubmitProposal => "/cosmos.gov.v1beta1.MsgSubmitProposal",
    gov::v1beta1::MsgVote => "/cosmos.gov.v1beta1.MsgVote",
    gov::v1beta1::MsgDeposit => "/cosmos.gov.v1beta1.MsgDeposit",
    gov::v1beta1::TextProposal => "/cosmos.gov.v1beta1.TextProposal",
    slashing::v1beta1::MsgUnjail => "/cosmos.slashing.v1beta1.MsgUnjail",
    params::v1beta1::ParameterChangeProposal => "/cosmos.params.v1beta1.ParameterChangeProposal",
    upgrade::v1beta1::SoftwareUpgradeProposal => "/cosmos.upgrade.v1beta1.SoftwareUpgradeProposal",
}
