//! Typed per-operation parameters
//!
//! Each operation reads its collection into one of the records below and
//! writes it back out under the API's wire names. Renames live here and
//! nowhere else.

use super::dispatch::Operation;
use super::fields::FieldBag;
use crate::linkup::credentials::LinkupCredentials;
use serde_json::{Map, Number, Value};

/// Flat request body sent to the API
pub type Payload = Map<String, Value>;

fn put<T: Clone + Into<Value>>(body: &mut Payload, key: &str, value: &Option<T>) {
    if let Some(v) = value {
        body.insert(key.to_string(), v.clone().into());
    }
}

fn non_empty(value: &str) -> Option<String> {
    Some(value.to_string()).filter(|s| !s.is_empty())
}

/// Round a duration down to whole milliseconds
fn floor_number(n: &Number) -> Option<i64> {
    n.as_i64().or_else(|| n.as_f64().map(|f| f.floor() as i64))
}

/// Text field that should carry JSON but may not
#[derive(Debug, Clone, PartialEq)]
pub enum JsonOrRaw {
    Parsed(Value),
    Raw(String),
}

impl JsonOrRaw {
    /// Never fails: unparseable input is kept as the original string
    pub fn parse(text: &str) -> Self {
        match serde_json::from_str(text) {
            Ok(value) => JsonOrRaw::Parsed(value),
            Err(_) => JsonOrRaw::Raw(text.to_string()),
        }
    }
}

impl From<JsonOrRaw> for Value {
    fn from(value: JsonOrRaw) -> Self {
        match value {
            JsonOrRaw::Parsed(v) => v,
            JsonOrRaw::Raw(s) => Value::String(s),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pagination {
    pub total_results: Option<Number>,
    pub start_page: Option<Number>,
    pub end_page: Option<Number>,
}

impl Pagination {
    fn read(fields: &FieldBag) -> Self {
        Self {
            total_results: fields.number("total_results"),
            start_page: fields.number("start_page"),
            end_page: fields.number("end_page"),
        }
    }

    fn write(&self, body: &mut Payload) {
        put(body, "total_results", &self.total_results);
        put(body, "start_page", &self.start_page);
        put(body, "end_page", &self.end_page);
    }
}

/// "Advanced Options" collection. Parsed for logging only; the request
/// still uses the configured timeout and is never retried.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AdvancedOptions {
    pub timeout_ms: Option<u64>,
    pub retry_count: Option<u64>,
}

impl AdvancedOptions {
    pub fn from_fields(fields: &FieldBag) -> Self {
        let whole = |name: &str| {
            fields
                .float(name)
                .filter(|f| *f > 0.0)
                .map(|f| f.floor() as u64)
        };
        Self {
            timeout_ms: whole("timeout"),
            retry_count: whole("retryCount"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoginParams {
    pub email: String,
    pub password: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VerifyCodeParams {
    pub email: String,
    pub code: Option<String>,
    pub country: Option<String>,
}

/// A single profile URL (profile info, invitation status)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileUrlParams {
    pub linkedin_url: Option<String>,
    pub country: Option<String>,
}

impl ProfileUrlParams {
    fn read(fields: &FieldBag) -> Self {
        Self {
            linkedin_url: fields.text("profileUrl"),
            country: fields.text("country"),
        }
    }

    fn write(&self, body: &mut Payload) {
        put(body, "linkedin_url", &self.linkedin_url);
        put(body, "country", &self.country);
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchProfileParams {
    pub keyword: Option<String>,
    pub location: Option<String>,
    pub company_url: Option<String>,
    pub school_url: Option<String>,
    pub network: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub title: Option<String>,
    pub fetch_invitation_state: Option<bool>,
    pub pagination: Pagination,
    pub country: Option<String>,
}

impl SearchProfileParams {
    fn read(fields: &FieldBag) -> Self {
        Self {
            keyword: fields.text("keyword"),
            location: fields.text("location"),
            company_url: fields.text("company_url"),
            school_url: fields.text("school_url"),
            network: fields.text("network"),
            first_name: fields.text("first_name"),
            last_name: fields.text("last_name"),
            title: fields.text("title"),
            fetch_invitation_state: fields.flag("fetch_invitation_state"),
            pagination: Pagination::read(fields),
            country: fields.text("country"),
        }
    }

    fn write(&self, body: &mut Payload) {
        put(body, "keyword", &self.keyword);
        put(body, "location", &self.location);
        put(body, "company_url", &self.company_url);
        put(body, "school_url", &self.school_url);
        put(body, "network", &self.network);
        put(body, "first_name", &self.first_name);
        put(body, "last_name", &self.last_name);
        put(body, "title", &self.title);
        put(body, "fetch_invitation_state", &self.fetch_invitation_state);
        self.pagination.write(body);
        put(body, "country", &self.country);
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchCompaniesParams {
    pub keyword: Option<String>,
    pub location: Option<String>,
    pub sector: Option<String>,
    pub company_size: Option<String>,
    pub pagination: Pagination,
    pub country: Option<String>,
}

impl SearchCompaniesParams {
    fn read(fields: &FieldBag) -> Self {
        Self {
            keyword: fields.text("keyword"),
            location: fields.text("location"),
            sector: fields.text("sector"),
            company_size: fields.text("company_size"),
            pagination: Pagination::read(fields),
            country: fields.text("country"),
        }
    }

    fn write(&self, body: &mut Payload) {
        put(body, "keyword", &self.keyword);
        put(body, "location", &self.location);
        put(body, "sector", &self.sector);
        put(body, "company_size", &self.company_size);
        self.pagination.write(body);
        put(body, "country", &self.country);
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompanyInfoParams {
    pub company_url: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConnectionRequestParams {
    pub linkedin_url: Option<String>,
    pub message: Option<String>,
    pub country: Option<String>,
}

/// Pagination plus country, for plain listing calls
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageParams {
    pub pagination: Pagination,
    pub country: Option<String>,
}

impl PageParams {
    fn read(fields: &FieldBag) -> Self {
        Self {
            pagination: Pagination::read(fields),
            country: fields.text("country"),
        }
    }

    fn write(&self, body: &mut Payload) {
        self.pagination.write(body);
        put(body, "country", &self.country);
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AcceptInvitationParams {
    pub shared_secret: Option<String>,
    pub entity_urn: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvitationListParams {
    pub invitation_type: Option<String>,
    pub page: PageParams,
}

impl InvitationListParams {
    fn read(fields: &FieldBag) -> Self {
        Self {
            invitation_type: fields.text("invitation_type"),
            page: PageParams::read(fields),
        }
    }

    fn write(&self, body: &mut Payload) {
        put(body, "invitation_type", &self.invitation_type);
        self.page.write(body);
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WithdrawInvitationParams {
    pub invitation_id: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SendMessageParams {
    pub linkedin_url: Option<String>,
    pub message_text: Option<String>,
    pub media_link: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InboxParams {
    pub total_results: Option<Number>,
    pub category: Option<String>,
    pub next_cursor: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversationParams {
    pub linkedin_url: Option<String>,
    pub conversation_id: Option<String>,
    pub pagination: Pagination,
    pub country: Option<String>,
}

/// Fields shared by every operation on the posts collection
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostTarget {
    pub post_url: Option<String>,
    pub country: Option<String>,
}

impl PostTarget {
    fn read(fields: &FieldBag) -> Self {
        Self {
            post_url: fields.text("postUrl"),
            country: fields.text("country"),
        }
    }

    fn write(&self, body: &mut Payload) {
        put(body, "post_url", &self.post_url);
        put(body, "country", &self.country);
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostPageParams {
    pub post: PostTarget,
    pub pagination: Pagination,
}

impl PostPageParams {
    fn read(fields: &FieldBag) -> Self {
        Self {
            post: PostTarget::read(fields),
            pagination: Pagination::read(fields),
        }
    }

    fn write(&self, body: &mut Payload) {
        self.post.write(body);
        self.pagination.write(body);
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReactionParams {
    pub post: PostTarget,
    pub reaction_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommentParams {
    pub post: PostTarget,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeSpentParams {
    pub post: PostTarget,
    /// Milliseconds, floored
    pub duration: Option<i64>,
    /// Epoch milliseconds, floored
    pub duration_start_time: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnswerCommentParams {
    pub tracking_id: Option<String>,
    pub profile_urn: Option<String>,
    pub comment_urn: Option<String>,
    pub comment_text: Option<String>,
    pub mention_user: Option<bool>,
    pub commenter_name: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchPostsParams {
    pub keyword: Option<String>,
    pub post_type: Option<String>,
    pub sort_by: Option<String>,
    pub post_date: Option<String>,
    pub linkedin_url: Option<String>,
    pub pagination: Pagination,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreatePostParams {
    pub message: Option<String>,
    pub file: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedParams {
    pub total_results: Option<Number>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidatesParams {
    pub job_id: Option<String>,
    pub location: Option<String>,
    pub years_of_experience: Option<String>,
    pub sort_type: Option<String>,
    pub sort_order: Option<String>,
    pub ratings: Option<String>,
    pub start: Option<String>,
    pub page: PageParams,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobPostsParams {
    pub job_id: Option<String>,
    pub fetch_details: Option<bool>,
    pub page: PageParams,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateCvParams {
    pub application_id: Option<String>,
    pub country: Option<String>,
}

/// Publish and close both target a single job
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobIdParams {
    pub job_id: Option<String>,
    pub country: Option<String>,
}

impl JobIdParams {
    fn read(fields: &FieldBag) -> Self {
        Self {
            job_id: fields.text("jobId"),
            country: fields.text("country"),
        }
    }

    fn write(&self, body: &mut Payload) {
        put(body, "job_id", &self.job_id);
        put(body, "country", &self.country);
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateJobParams {
    pub company_url: Option<String>,
    pub title: Option<String>,
    pub place: Option<String>,
    pub html_description: Option<String>,
    pub employment_status: Option<String>,
    pub workplace: Option<String>,
    pub skills: Option<JsonOrRaw>,
    pub screening_questions: Option<JsonOrRaw>,
    pub auto_rejection_template: Option<String>,
    pub contact_email: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompaniesDataParams {
    pub keyword: Option<String>,
    pub industry: Option<String>,
    pub location: Option<String>,
    pub employee_range: Option<String>,
    pub founding_company: Option<bool>,
    pub total_results: Option<Number>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfilesDataParams {
    pub keyword: Option<String>,
    pub job_title: Option<String>,
    pub industry: Option<String>,
    pub school: Option<String>,
    pub location: Option<String>,
    pub current_company: Option<String>,
    pub total_results: Option<Number>,
}

/// Parameters for one call, tagged by operation
#[derive(Debug, Clone, PartialEq)]
pub enum OperationParams {
    Login(LoginParams),
    VerifyCode(VerifyCodeParams),
    GetMyProfile,
    ExtractProfileInfo(ProfileUrlParams),
    SearchProfile(SearchProfileParams),
    SearchCompanies(SearchCompaniesParams),
    GetCompanyInfo(CompanyInfoParams),
    SendConnectionRequest(ConnectionRequestParams),
    GetConnections(PageParams),
    AcceptConnectionInvitation(AcceptInvitationParams),
    GetReceivedInvitations(InvitationListParams),
    GetSentInvitations(InvitationListParams),
    WithdrawInvitation(WithdrawInvitationParams),
    GetNetworkRecommendations(PageParams),
    GetInvitationStatus(ProfileUrlParams),
    SendMessage(SendMessageParams),
    GetMessageInbox(InboxParams),
    GetConversationMessages(ConversationParams),
    GetPostReactions(PostPageParams),
    ReactToPost(ReactionParams),
    Repost(PostTarget),
    CommentPost(CommentParams),
    ExtractComments(PostPageParams),
    AnswerComment(AnswerCommentParams),
    SearchPosts(SearchPostsParams),
    CreatePost(CreatePostParams),
    GetFeed(FeedParams),
    TimeSpent(TimeSpentParams),
    GetCandidates(CandidatesParams),
    GetCandidateCv(CandidateCvParams),
    GetJobPosts(JobPostsParams),
    PublishJob(JobIdParams),
    CloseJob(JobIdParams),
    CreateJob(CreateJobParams),
    SearchCompaniesData(CompaniesDataParams),
    SearchProfilesData(ProfilesDataParams),
}

impl OperationParams {
    /// Read the typed record for `operation` out of its collection.
    /// Authentication calls take the account fields from `credentials`.
    pub fn from_fields(
        operation: Operation,
        fields: &FieldBag,
        credentials: &LinkupCredentials,
    ) -> Self {
        let text = |name: &str| fields.text(name);
        let country = || fields.text("country");

        match operation {
            Operation::Login => OperationParams::Login(LoginParams {
                email: credentials.email.clone(),
                password: credentials.password.clone(),
                country: credentials.country.clone(),
            }),
            Operation::VerifyCode => OperationParams::VerifyCode(VerifyCodeParams {
                email: credentials.email.clone(),
                code: text("verificationCode"),
                country: country(),
            }),
            Operation::GetMyProfile => OperationParams::GetMyProfile,
            Operation::ExtractProfileInfo => {
                OperationParams::ExtractProfileInfo(ProfileUrlParams::read(fields))
            }
            Operation::SearchProfile => {
                OperationParams::SearchProfile(SearchProfileParams::read(fields))
            }
            Operation::SearchCompanies => {
                OperationParams::SearchCompanies(SearchCompaniesParams::read(fields))
            }
            Operation::GetCompanyInfo => OperationParams::GetCompanyInfo(CompanyInfoParams {
                company_url: text("companyUrl"),
                country: country(),
            }),
            Operation::SendConnectionRequest => {
                OperationParams::SendConnectionRequest(ConnectionRequestParams {
                    linkedin_url: text("profileUrl"),
                    message: text("connectionMessage"),
                    country: country(),
                })
            }
            Operation::GetConnections => OperationParams::GetConnections(PageParams::read(fields)),
            Operation::AcceptConnectionInvitation => {
                OperationParams::AcceptConnectionInvitation(AcceptInvitationParams {
                    shared_secret: text("sharedSecret"),
                    entity_urn: text("entityUrn"),
                    country: country(),
                })
            }
            Operation::GetReceivedInvitations => {
                OperationParams::GetReceivedInvitations(InvitationListParams::read(fields))
            }
            Operation::GetSentInvitations => {
                OperationParams::GetSentInvitations(InvitationListParams::read(fields))
            }
            Operation::WithdrawInvitation => {
                OperationParams::WithdrawInvitation(WithdrawInvitationParams {
                    invitation_id: text("invitationId"),
                    country: country(),
                })
            }
            Operation::GetNetworkRecommendations => {
                OperationParams::GetNetworkRecommendations(PageParams::read(fields))
            }
            Operation::GetInvitationStatus => {
                OperationParams::GetInvitationStatus(ProfileUrlParams::read(fields))
            }
            Operation::SendMessage => OperationParams::SendMessage(SendMessageParams {
                linkedin_url: text("messageRecipientUrl"),
                message_text: text("messageText"),
                media_link: text("mediaLink"),
                country: country(),
            }),
            Operation::GetMessageInbox => OperationParams::GetMessageInbox(InboxParams {
                total_results: fields.number("total_results"),
                category: text("category"),
                next_cursor: text("next_cursor"),
                country: country(),
            }),
            Operation::GetConversationMessages => {
                OperationParams::GetConversationMessages(ConversationParams {
                    linkedin_url: text("linkedinUrl"),
                    conversation_id: text("conversationId"),
                    pagination: Pagination::read(fields),
                    country: country(),
                })
            }
            Operation::GetPostReactions => {
                OperationParams::GetPostReactions(PostPageParams::read(fields))
            }
            Operation::ReactToPost => OperationParams::ReactToPost(ReactionParams {
                post: PostTarget::read(fields),
                reaction_type: text("reactionType"),
            }),
            Operation::Repost => OperationParams::Repost(PostTarget::read(fields)),
            Operation::CommentPost => OperationParams::CommentPost(CommentParams {
                post: PostTarget::read(fields),
                message: text("messageText"),
            }),
            Operation::ExtractComments => {
                OperationParams::ExtractComments(PostPageParams::read(fields))
            }
            Operation::AnswerComment => OperationParams::AnswerComment(AnswerCommentParams {
                tracking_id: text("trackingId"),
                profile_urn: text("profileUrn"),
                comment_urn: text("commentUrn"),
                comment_text: text("commentText"),
                mention_user: fields.flag("mentionUser"),
                commenter_name: text("commenterName"),
                country: country(),
            }),
            Operation::SearchPosts => OperationParams::SearchPosts(SearchPostsParams {
                keyword: text("keyword"),
                post_type: text("post_type"),
                sort_by: text("sort_by"),
                post_date: text("post_date"),
                linkedin_url: text("linkedin_url"),
                pagination: Pagination::read(fields),
                country: country(),
            }),
            Operation::CreatePost => OperationParams::CreatePost(CreatePostParams {
                message: text("messageText"),
                file: text("file"),
                country: country(),
            }),
            Operation::GetFeed => OperationParams::GetFeed(FeedParams {
                total_results: fields.number("total_results"),
                country: country(),
            }),
            Operation::TimeSpent => OperationParams::TimeSpent(TimeSpentParams {
                post: PostTarget::read(fields),
                duration: fields.number("duration").as_ref().and_then(floor_number),
                duration_start_time: fields
                    .number("durationStartTime")
                    .as_ref()
                    .and_then(floor_number),
            }),
            Operation::GetCandidates => OperationParams::GetCandidates(CandidatesParams {
                job_id: text("jobId"),
                location: text("location"),
                years_of_experience: text("yearsOfExperience"),
                sort_type: text("sortType"),
                sort_order: text("sortOrder"),
                ratings: text("ratings"),
                start: text("start"),
                page: PageParams::read(fields),
            }),
            Operation::GetCandidateCv => OperationParams::GetCandidateCv(CandidateCvParams {
                application_id: text("applicationId"),
                country: country(),
            }),
            Operation::GetJobPosts => OperationParams::GetJobPosts(JobPostsParams {
                job_id: text("jobId"),
                fetch_details: fields.flag("fetchDetails"),
                page: PageParams::read(fields),
            }),
            Operation::PublishJob => OperationParams::PublishJob(JobIdParams::read(fields)),
            Operation::CloseJob => OperationParams::CloseJob(JobIdParams::read(fields)),
            Operation::CreateJob => OperationParams::CreateJob(CreateJobParams {
                company_url: text("companyUrl"),
                title: text("jobTitle"),
                place: text("place"),
                html_description: text("html_description"),
                employment_status: text("employment_status"),
                workplace: text("workplace"),
                skills: text("skills").as_deref().map(JsonOrRaw::parse),
                screening_questions: text("screening_questions")
                    .as_deref()
                    .map(JsonOrRaw::parse),
                auto_rejection_template: text("auto_rejection_template"),
                contact_email: text("contact_email"),
                country: country(),
            }),
            Operation::SearchCompaniesData => {
                OperationParams::SearchCompaniesData(CompaniesDataParams {
                    keyword: text("keyword"),
                    industry: text("industry"),
                    location: text("location"),
                    employee_range: text("employee_range"),
                    founding_company: fields.flag("founding_company"),
                    total_results: fields.number("total_results"),
                })
            }
            Operation::SearchProfilesData => {
                OperationParams::SearchProfilesData(ProfilesDataParams {
                    keyword: text("keyword"),
                    job_title: text("job_title"),
                    industry: text("industry"),
                    school: text("school"),
                    location: text("location"),
                    current_company: text("current_company"),
                    total_results: fields.number("total_results"),
                })
            }
        }
    }

    /// Write the wire fields into `body`. Absent values are skipped.
    pub fn write_into(&self, body: &mut Payload) {
        match self {
            OperationParams::Login(p) => {
                put(body, "email", &non_empty(&p.email));
                put(body, "password", &non_empty(&p.password));
                body.insert("country".to_string(), Value::from(p.country.as_str()));
            }
            OperationParams::VerifyCode(p) => {
                put(body, "email", &non_empty(&p.email));
                put(body, "code", &p.code);
                put(body, "country", &p.country);
            }
            OperationParams::GetMyProfile => {}
            OperationParams::ExtractProfileInfo(p) | OperationParams::GetInvitationStatus(p) => {
                p.write(body)
            }
            OperationParams::SearchProfile(p) => p.write(body),
            OperationParams::SearchCompanies(p) => p.write(body),
            OperationParams::GetCompanyInfo(p) => {
                put(body, "company_url", &p.company_url);
                put(body, "country", &p.country);
            }
            OperationParams::SendConnectionRequest(p) => {
                put(body, "linkedin_url", &p.linkedin_url);
                put(body, "message", &p.message);
                put(body, "country", &p.country);
            }
            OperationParams::GetConnections(p) | OperationParams::GetNetworkRecommendations(p) => {
                p.write(body)
            }
            OperationParams::AcceptConnectionInvitation(p) => {
                put(body, "shared_secret", &p.shared_secret);
                put(body, "entity_urn", &p.entity_urn);
                put(body, "country", &p.country);
            }
            OperationParams::GetReceivedInvitations(p) | OperationParams::GetSentInvitations(p) => {
                p.write(body)
            }
            OperationParams::WithdrawInvitation(p) => {
                put(body, "invitation_id", &p.invitation_id);
                put(body, "country", &p.country);
            }
            OperationParams::SendMessage(p) => {
                put(body, "linkedin_url", &p.linkedin_url);
                put(body, "message_text", &p.message_text);
                put(body, "media_link", &p.media_link);
                put(body, "country", &p.country);
            }
            OperationParams::GetMessageInbox(p) => {
                put(body, "total_results", &p.total_results);
                put(body, "category", &p.category);
                put(body, "next_cursor", &p.next_cursor);
                put(body, "country", &p.country);
            }
            OperationParams::GetConversationMessages(p) => {
                put(body, "linkedin_url", &p.linkedin_url);
                put(body, "conversation_id", &p.conversation_id);
                p.pagination.write(body);
                put(body, "country", &p.country);
            }
            OperationParams::GetPostReactions(p) | OperationParams::ExtractComments(p) => {
                p.write(body)
            }
            OperationParams::ReactToPost(p) => {
                p.post.write(body);
                put(body, "reaction_type", &p.reaction_type);
            }
            OperationParams::Repost(p) => p.write(body),
            OperationParams::CommentPost(p) => {
                p.post.write(body);
                put(body, "message", &p.message);
            }
            OperationParams::AnswerComment(p) => {
                put(body, "tracking_id", &p.tracking_id);
                put(body, "profile_urn", &p.profile_urn);
                put(body, "comment_urn", &p.comment_urn);
                put(body, "comment_text", &p.comment_text);
                put(body, "mention_user", &p.mention_user);
                put(body, "commenter_name", &p.commenter_name);
                put(body, "country", &p.country);
            }
            OperationParams::SearchPosts(p) => {
                put(body, "keyword", &p.keyword);
                put(body, "post_type", &p.post_type);
                put(body, "sort_by", &p.sort_by);
                put(body, "post_date", &p.post_date);
                put(body, "linkedin_url", &p.linkedin_url);
                p.pagination.write(body);
                put(body, "country", &p.country);
            }
            OperationParams::CreatePost(p) => {
                put(body, "message", &p.message);
                put(body, "file", &p.file);
                put(body, "country", &p.country);
            }
            OperationParams::GetFeed(p) => {
                put(body, "total_results", &p.total_results);
                put(body, "country", &p.country);
            }
            OperationParams::TimeSpent(p) => {
                p.post.write(body);
                put(body, "duration", &p.duration);
                put(body, "duration_start_time", &p.duration_start_time);
            }
            OperationParams::GetCandidates(p) => {
                put(body, "job_id", &p.job_id);
                put(body, "location", &p.location);
                put(body, "yearsOfExperience", &p.years_of_experience);
                put(body, "sortType", &p.sort_type);
                put(body, "sortOrder", &p.sort_order);
                put(body, "ratings", &p.ratings);
                put(body, "start", &p.start);
                p.page.write(body);
            }
            OperationParams::GetCandidateCv(p) => {
                put(body, "application_id", &p.application_id);
                put(body, "country", &p.country);
            }
            OperationParams::GetJobPosts(p) => {
                put(body, "job_id", &p.job_id);
                put(body, "fetch_details", &p.fetch_details);
                p.page.write(body);
            }
            OperationParams::PublishJob(p) | OperationParams::CloseJob(p) => p.write(body),
            OperationParams::CreateJob(p) => {
                put(body, "company_url", &p.company_url);
                put(body, "title", &p.title);
                put(body, "place", &p.place);
                put(body, "html_description", &p.html_description);
                put(body, "employment_status", &p.employment_status);
                put(body, "workplace", &p.workplace);
                put(body, "skills", &p.skills);
                put(body, "screening_questions", &p.screening_questions);
                put(body, "auto_rejection_template", &p.auto_rejection_template);
                put(body, "contact_email", &p.contact_email);
                put(body, "country", &p.country);
            }
            OperationParams::SearchCompaniesData(p) => {
                put(body, "keyword", &p.keyword);
                put(body, "industry", &p.industry);
                put(body, "location", &p.location);
                put(body, "employee_range", &p.employee_range);
                put(body, "founding_company", &p.founding_company);
                put(body, "total_results", &p.total_results);
            }
            OperationParams::SearchProfilesData(p) => {
                put(body, "keyword", &p.keyword);
                put(body, "job_title", &p.job_title);
                put(body, "industry", &p.industry);
                put(body, "school", &p.school);
                put(body, "location", &p.location);
                put(body, "current_company", &p.current_company);
                put(body, "total_results", &p.total_results);
            }
        }
    }
}
