//! Protobuf wire types
//!
//! Hand-maintained `prost` definitions for the subset of Cosmos SDK and Akash
//! messages this crate decodes. Only the fields the decoders read are declared;
//! prost skips unknown fields, so newer chain versions still decode.

/// Associates a wire type with the type URL it is packed under in an `Any`
pub trait TypeUrl {
    /// Fully qualified type URL, e.g. `/cosmos.bank.v1beta1.MsgSend`
    const TYPE_URL: &'static str;
}

macro_rules! impl_type_url {
    ($($ty:ty => $url:literal),* $(,)?) => {
        $(
            impl $crate::proto::TypeUrl for $ty {
                const TYPE_URL: &'static str = $url;
            }
        )*
    };
}

pub(crate) use impl_type_url;

pub mod akash;
pub mod cosmos;
