//! Operation routing
//!
//! Every operation the node exposes is a variant of [`Operation`]. The route
//! table below is an exhaustive match, so adding a variant without an
//! endpoint or parameter collection is a compile error.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Path returned for operation ids that are not in the table
pub const UNKNOWN_ENDPOINT: &str = "/unknown";

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown operation: {0}")]
pub struct UnknownOperation(pub String);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown resource: {0}")]
pub struct UnknownResource(pub String);

/// Top-level operation category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Authentication,
    Profile,
    Company,
    Network,
    Message,
    Post,
    Recruiter,
    Data,
}

impl Resource {
    pub const ALL: [Resource; 8] = [
        Resource::Authentication,
        Resource::Profile,
        Resource::Company,
        Resource::Network,
        Resource::Message,
        Resource::Post,
        Resource::Recruiter,
        Resource::Data,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Resource::Authentication => "authentication",
            Resource::Profile => "profile",
            Resource::Company => "company",
            Resource::Network => "network",
            Resource::Message => "message",
            Resource::Post => "post",
            Resource::Recruiter => "recruiter",
            Resource::Data => "data",
        }
    }

    pub fn operations(self) -> impl Iterator<Item = Operation> {
        Operation::ALL
            .into_iter()
            .filter(move |op| op.resource() == self)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Resource {
    type Err = UnknownResource;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Resource::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| UnknownResource(s.to_string()))
    }
}

/// A single selectable action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    // authentication
    Login,
    VerifyCode,
    // profile
    GetMyProfile,
    ExtractProfileInfo,
    SearchProfile,
    // company
    SearchCompanies,
    GetCompanyInfo,
    // network
    SendConnectionRequest,
    GetConnections,
    AcceptConnectionInvitation,
    GetReceivedInvitations,
    GetSentInvitations,
    WithdrawInvitation,
    GetNetworkRecommendations,
    GetInvitationStatus,
    // message
    SendMessage,
    GetMessageInbox,
    GetConversationMessages,
    // post
    GetPostReactions,
    ReactToPost,
    Repost,
    CommentPost,
    ExtractComments,
    AnswerComment,
    SearchPosts,
    CreatePost,
    GetFeed,
    TimeSpent,
    // recruiter
    GetCandidates,
    GetCandidateCv,
    GetJobPosts,
    PublishJob,
    CloseJob,
    CreateJob,
    // data
    SearchCompaniesData,
    SearchProfilesData,
}

/// Static routing record for one operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationRoute {
    /// Wire identifier used by the host (e.g., "sendMessage")
    pub id: &'static str,
    pub resource: Resource,
    /// Path suffix appended to the API base URL
    pub endpoint: &'static str,
    /// Parameter collections to read, first non-empty one wins
    pub collections: &'static [&'static str],
}

const fn route(
    id: &'static str,
    resource: Resource,
    endpoint: &'static str,
    collections: &'static [&'static str],
) -> OperationRoute {
    OperationRoute {
        id,
        resource,
        endpoint,
        collections,
    }
}

impl Operation {
    pub const ALL: [Operation; 36] = [
        Operation::Login,
        Operation::VerifyCode,
        Operation::GetMyProfile,
        Operation::ExtractProfileInfo,
        Operation::SearchProfile,
        Operation::SearchCompanies,
        Operation::GetCompanyInfo,
        Operation::SendConnectionRequest,
        Operation::GetConnections,
        Operation::AcceptConnectionInvitation,
        Operation::GetReceivedInvitations,
        Operation::GetSentInvitations,
        Operation::WithdrawInvitation,
        Operation::GetNetworkRecommendations,
        Operation::GetInvitationStatus,
        Operation::SendMessage,
        Operation::GetMessageInbox,
        Operation::GetConversationMessages,
        Operation::GetPostReactions,
        Operation::ReactToPost,
        Operation::Repost,
        Operation::CommentPost,
        Operation::ExtractComments,
        Operation::AnswerComment,
        Operation::SearchPosts,
        Operation::CreatePost,
        Operation::GetFeed,
        Operation::TimeSpent,
        Operation::GetCandidates,
        Operation::GetCandidateCv,
        Operation::GetJobPosts,
        Operation::PublishJob,
        Operation::CloseJob,
        Operation::CreateJob,
        Operation::SearchCompaniesData,
        Operation::SearchProfilesData,
    ];

    /// Routing record for this operation
    pub fn route(self) -> OperationRoute {
        use Resource::*;

        match self {
            Operation::Login => route("login", Authentication, "/auth/login", &[]),
            Operation::VerifyCode => route("verifyCode", Authentication, "/auth/verify", &["authParams"]),

            Operation::GetMyProfile => route("getMyProfile", Profile, "/profile/me", &[]),
            Operation::ExtractProfileInfo => {
                route("extractProfileInfo", Profile, "/profile/info", &["profileParams"])
            }
            Operation::SearchProfile => {
                route("searchProfile", Profile, "/profile/search", &["searchProfileParams"])
            }

            Operation::SearchCompanies => route(
                "searchCompanies",
                Company,
                "/companies/search",
                &["searchCompaniesParams"],
            ),
            Operation::GetCompanyInfo => {
                route("getCompanyInfo", Company, "/companies/info", &["companiesParams"])
            }

            Operation::SendConnectionRequest => route(
                "sendConnectionRequest",
                Network,
                "/network/connect",
                &["networkParams"],
            ),
            Operation::GetConnections => route(
                "getConnections",
                Network,
                "/network/connections",
                &["getConnectionsParams"],
            ),
            Operation::AcceptConnectionInvitation => route(
                "acceptConnectionInvitation",
                Network,
                "/network/accept-invitations",
                &["acceptConnectionParams"],
            ),
            Operation::GetReceivedInvitations => route(
                "getReceivedInvitations",
                Network,
                "/network/invitations",
                &["getInvitationsParams"],
            ),
            Operation::GetSentInvitations => route(
                "getSentInvitations",
                Network,
                "/network/sent-invitations",
                &["getInvitationsParams"],
            ),
            Operation::WithdrawInvitation => route(
                "withdrawInvitation",
                Network,
                "/network/withdraw-invitation",
                &["withdrawInvitationParams"],
            ),
            Operation::GetNetworkRecommendations => route(
                "getNetworkRecommendations",
                Network,
                "/network/recommendations",
                &["getNetworkRecommendationsParams"],
            ),
            // The form shows both groups for this operation
            Operation::GetInvitationStatus => route(
                "getInvitationStatus",
                Network,
                "/network/invitation-status",
                &["profileParams", "getInvitationStatusParams"],
            ),

            Operation::SendMessage => route("sendMessage", Message, "/messages/send", &["messagesParams"]),
            Operation::GetMessageInbox => route(
                "getMessageInbox",
                Message,
                "/messages/inbox",
                &["getMessageInboxParams"],
            ),
            Operation::GetConversationMessages => route(
                "getConversationMessages",
                Message,
                "/messages/conversation-messages",
                &["conversationMessagesParams"],
            ),

            Operation::GetPostReactions => {
                route("getPostReactions", Post, "/posts/reactions", &["postsParams"])
            }
            Operation::ReactToPost => route("reactToPost", Post, "/posts/react", &["postsParams"]),
            Operation::Repost => route("repost", Post, "/posts/repost", &["postsParams"]),
            Operation::CommentPost => route("commentPost", Post, "/posts/comment", &["postsParams"]),
            Operation::ExtractComments => {
                route("extractComments", Post, "/posts/extract-comments", &["postsParams"])
            }
            Operation::AnswerComment => route(
                "answerComment",
                Post,
                "/posts/answer-comment",
                &["answerCommentParams"],
            ),
            Operation::SearchPosts => route("searchPosts", Post, "/posts/search", &["searchPostsParams"]),
            Operation::CreatePost => route("createPost", Post, "/posts/create", &["createPostParams"]),
            Operation::GetFeed => route("getFeed", Post, "/posts/feed", &["getFeedParams"]),
            Operation::TimeSpent => route("timeSpent", Post, "/posts/time-spent", &["postsParams"]),

            Operation::GetCandidates => {
                route("getCandidates", Recruiter, "/recruiter/candidates", &["recruiterParams"])
            }
            Operation::GetCandidateCv => {
                route("getCandidateCV", Recruiter, "/recruiter/cv", &["getCandidateCVParams"])
            }
            Operation::GetJobPosts => {
                route("getJobPosts", Recruiter, "/recruiter/job-posts", &["recruiterParams"])
            }
            Operation::PublishJob => route(
                "publishJob",
                Recruiter,
                "/recruiter/publish-job",
                &["publishCloseJobParams"],
            ),
            Operation::CloseJob => route(
                "closeJob",
                Recruiter,
                "/recruiter/close-job",
                &["publishCloseJobParams"],
            ),
            Operation::CreateJob => {
                route("createJob", Recruiter, "/recruiter/create-job", &["createJobParams"])
            }

            Operation::SearchCompaniesData => route(
                "searchCompaniesData",
                Data,
                "/data/search/companies",
                &["dataCompaniesParams"],
            ),
            Operation::SearchProfilesData => route(
                "searchProfilesData",
                Data,
                "/data/search/profiles",
                &["dataProfilesParams"],
            ),
        }
    }

    pub fn as_str(self) -> &'static str {
        self.route().id
    }

    pub fn resource(self) -> Resource {
        self.route().resource
    }

    pub fn endpoint(self) -> &'static str {
        self.route().endpoint
    }

    pub fn collections(self) -> &'static [&'static str] {
        self.route().collections
    }

    /// Whether the payload carries the account's `login_token`.
    ///
    /// Login and verification run before a session exists, and the data
    /// searches are account-independent enrichment calls.
    pub fn requires_session(self) -> bool {
        !matches!(
            self,
            Operation::Login
                | Operation::VerifyCode
                | Operation::SearchCompaniesData
                | Operation::SearchProfilesData
        )
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| UnknownOperation(s.to_string()))
    }
}

/// Resolve an operation id to its endpoint path, or [`UNKNOWN_ENDPOINT`]
pub fn endpoint_for(operation: &str) -> &'static str {
    operation
        .parse::<Operation>()
        .map(Operation::endpoint)
        .unwrap_or(UNKNOWN_ENDPOINT)
}

/// Whether an operation id carries `login_token`; unknown ids do
pub fn requires_session(operation: &str) -> bool {
    operation
        .parse::<Operation>()
        .map(Operation::requires_session)
        .unwrap_or(true)
}
