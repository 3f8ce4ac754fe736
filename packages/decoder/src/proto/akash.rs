//! Akash Network wire types

pub mod base {
    pub mod v1beta3 {
        /// Attribute represents a key/value pair attached to a provider.
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct Attribute {
            #[prost(string, tag = "1")]
            pub key: ::prost::alloc::string::String,
            #[prost(string, tag = "2")]
            pub value: ::prost::alloc::string::String,
        }
    }
}

pub mod deployment {
    pub mod v1beta3 {
        use crate::proto::cosmos::base::v1beta1::Coin;

        /// DeploymentID stores owner and sequence number.
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct DeploymentId {
            #[prost(string, tag = "1")]
            pub owner: ::prost::alloc::string::String,
            #[prost(uint64, tag = "2")]
            pub dseq: u64,
        }
        /// MsgCreateDeployment defines an SDK message for creating a deployment.
        /// Group specs (tag 2) are not decoded.
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct MsgCreateDeployment {
            #[prost(message, optional, tag = "1")]
            pub id: ::core::option::Option<DeploymentId>,
            #[prost(bytes = "vec", tag = "3")]
            pub version: ::prost::alloc::vec::Vec<u8>,
            #[prost(message, optional, tag = "4")]
            pub deposit: ::core::option::Option<Coin>,
            #[prost(string, tag = "5")]
            pub depositor: ::prost::alloc::string::String,
        }
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct MsgDepositDeployment {
            #[prost(message, optional, tag = "1")]
            pub id: ::core::option::Option<DeploymentId>,
            #[prost(message, optional, tag = "2")]
            pub amount: ::core::option::Option<Coin>,
            #[prost(string, tag = "3")]
            pub depositor: ::prost::alloc::string::String,
        }
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct MsgUpdateDeployment {
            #[prost(message, optional, tag = "1")]
            pub id: ::core::option::Option<DeploymentId>,
            #[prost(bytes = "vec", tag = "3")]
            pub version: ::prost::alloc::vec::Vec<u8>,
        }
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct MsgCloseDeployment {
            #[prost(message, optional, tag = "1")]
            pub id: ::core::option::Option<DeploymentId>,
        }
    }
}

pub mod market {
    pub mod v1beta4 {
        use crate::proto::cosmos::base::v1beta1::{Coin, DecCoin};

        /// OrderID stores owner and all other seq numbers.
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct OrderId {
            #[prost(string, tag = "1")]
            pub owner: ::prost::alloc::string::String,
            #[prost(uint64, tag = "2")]
            pub dseq: u64,
            #[prost(uint32, tag = "3")]
            pub gseq: u32,
            #[prost(uint32, tag = "4")]
            pub oseq: u32,
        }
        /// BidID stores owner, provider and all other seq numbers. Leases share
        /// the same layout.
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct BidId {
            #[prost(string, tag = "1")]
            pub owner: ::prost::alloc::string::String,
            #[prost(uint64, tag = "2")]
            pub dseq: u64,
            #[prost(uint32, tag = "3")]
            pub gseq: u32,
            #[prost(uint32, tag = "4")]
            pub oseq: u32,
            #[prost(string, tag = "5")]
            pub provider: ::prost::alloc::string::String,
        }
        pub type LeaseId = BidId;

        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct MsgCreateBid {
            #[prost(message, optional, tag = "1")]
            pub order: ::core::option::Option<OrderId>,
            #[prost(string, tag = "2")]
            pub provider: ::prost::alloc::string::String,
            #[prost(message, optional, tag = "3")]
            pub price: ::core::option::Option<DecCoin>,
            #[prost(message, optional, tag = "4")]
            pub deposit: ::core::option::Option<Coin>,
        }
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct MsgCloseBid {
            #[prost(message, optional, tag = "1")]
            pub bid_id: ::core::option::Option<BidId>,
        }
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct MsgCreateLease {
            #[prost(message, optional, tag = "1")]
            pub bid_id: ::core::option::Option<BidId>,
        }
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct MsgCloseLease {
            #[prost(message, optional, tag = "1")]
            pub lease_id: ::core::option::Option<LeaseId>,
        }
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct MsgWithdrawLease {
            #[prost(message, optional, tag = "1")]
            pub bid_id: ::core::option::Option<LeaseId>,
        }
    }
}

pub mod cert {
    pub mod v1beta3 {
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct CertificateId {
            #[prost(string, tag = "1")]
            pub owner: ::prost::alloc::string::String,
            #[prost(string, tag = "2")]
            pub serial: ::prost::alloc::string::String,
        }
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct MsgCreateCertificate {
            #[prost(string, tag = "1")]
            pub owner: ::prost::alloc::string::String,
            #[prost(bytes = "vec", tag = "2")]
            pub cert: ::prost::alloc::vec::Vec<u8>,
            #[prost(bytes = "vec", tag = "3")]
            pub pubkey: ::prost::alloc::vec::Vec<u8>,
        }
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct MsgRevokeCertificate {
            #[prost(message, optional, tag = "1")]
            pub id: ::core::option::Option<CertificateId>,
        }
    }
}

pub mod provider {
    pub mod v1beta3 {
        use super::super::base::v1beta3::Attribute;

        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct ProviderInfo {
            #[prost(string, tag = "1")]
            pub email: ::prost::alloc::string::String,
            #[prost(string, tag = "2")]
            pub website: ::prost::alloc::string::String,
        }
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct MsgCreateProvider {
            #[prost(string, tag = "1")]
            pub owner: ::prost::alloc::string::String,
            #[prost(string, tag = "2")]
            pub host_uri: ::prost::alloc::string::String,
            #[prost(message, repeated, tag = "3")]
            pub attributes: ::prost::alloc::vec::Vec<Attribute>,
            #[prost(message, optional, tag = "4")]
            pub info: ::core::option::Option<ProviderInfo>,
        }
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct MsgUpdateProvider {
            #[prost(string, tag = "1")]
            pub owner: ::prost::alloc::string::String,
            #[prost(string, tag = "2")]
            pub host_uri: ::prost::alloc::string::String,
            #[prost(message, repeated, tag = "3")]
            pub attributes: ::prost::alloc::vec::Vec<Attribute>,
            #[prost(message, optional, tag = "4")]
            pub info: ::core::option::Option<ProviderInfo>,
        }
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct MsgDeleteProvider {
            #[prost(string, tag = "1")]
            pub owner: ::prost::alloc::string::String,
        }
    }
}

pub mod audit {
    pub mod v1beta3 {
        use super::super::base::v1beta3::Attribute;

        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct MsgSignProviderAttributes {
            #[prost(string, tag = "1")]
            pub owner: ::prost::alloc::string::String,
            #[prost(string, tag = "2")]
            pub auditor: ::prost::alloc::string::String,
            #[prost(message, repeated, tag = "3")]
            pub attributes: ::prost::alloc::vec::Vec<Attribute>,
        }
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct MsgDeleteProviderAttributes {
            #[prost(string, tag = "1")]
            pub owner: ::prost::alloc::string::String,
            #[prost(string, tag = "2")]
            pub auditor: ::prost::alloc::string::String,
            #[prost(string, repeated, tag = "3")]
            pub keys: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
        }
    }
}

super::impl_type_url! {
    deployment::v1beta3::MsgCreateDeployment => "/akash.deployment.v1beta3.MsgCreateDeployment",
    deployment::v1beta3::MsgDepositDeployment => "/akash.deployment.v1beta3.MsgDepositDeployment",
    deployment::v1beta3::MsgUpdateDeployment => "/akash.deployment.v1beta3.MsgUpdateDeployment",
    deployment::v1beta3::MsgCloseDeployment => "/akash.deployment.v1beta3.MsgCloseDeployment",
    market::v1beta4::MsgCreateBid => "/akash.market.v1beta4.MsgCreateBid",
    market::v1beta4::MsgCloseBid => "/akash.market.v1beta4.MsgCloseBid",
    market::v1beta4::MsgCreateLease => "/akash.market.v1beta4.MsgCreateLease",
    market::v1beta4::MsgCloseLease => "/akash.market.v1beta4.MsgCloseLease",
    market::v1beta4::MsgWithdrawLease => "/akash.market.v1beta4.MsgWithdrawLease",
    cert::v1beta3::MsgCreateCertificate => "/akash.cert.v1beta3.MsgCreateCertificate",
    cert::v1beta3::MsgRevokeCertificate => "/akash.cert.v1beta3.MsgRevokeCertificate",
    provider::v1beta3::MsgCreateProvider => "/akash.provider.v1beta3.MsgCreateProvider",
    provider::v1beta3::MsgUpdateProvider => "/akash.provider.v1beta3.MsgUpdateProvider",
    provider::v1beta3::MsgDeleteProvider => "/akash.provider.v1beta3.MsgDeleteProvider",
    audit::v1beta3::MsgSignProviderAttributes => "/akash.audit.v1beta3.MsgSignProviderAttributes",
    audit::v1beta3::MsgDeleteProviderAttributes => "/akash.audit.v1beta3.MsgDeleteProviderAttributes",
}
