pub mod credentials;
pub mod http;

pub use credentials::{
    load_credentials, mask_credential, CredentialRecord, CredentialStore, CredentialsError,
    EnvCredentialStore, LinkupCredentials,
};
pub use http::{build_request_options, LinkupHttpClient, RequestError, RequestOptions, Transport};
