//! Mock tracker and text generator for testing
//!
//! Not every helper is used by every test binary.

#![allow(dead_code)]

use async_trait::async_trait;
use cicd_helper::error::{Error, Result};
use cicd_helper::platform::{IssueTracker, MergeRequestTracker};
use cicd_helper::types::{GenerationParameters, MergeRequest, PostedComment};
use cicd_helper::vertex::TextGenerator;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

/// Call record for comment creation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentCall {
    /// `create_issue_comment`
    Issue { number: u64, body: String },
    /// `create_merge_request_comment`
    MergeRequest { number: u64, body: String },
}

/// Simple mock tracker
///
/// Features:
/// - Auto-incrementing comment IDs
/// - Call tracking for verification
/// - Configurable merge request list
/// - Error injection for failure path testing
pub struct MockTracker {
    project: String,
    next_comment_id: AtomicU64,
    merge_requests: Mutex<Vec<MergeRequest>>,
    comment_calls: Mutex<Vec<CommentCall>>,
    find_calls: Mutex<Vec<Option<String>>>,
    error_on_comment: Mutex<Option<String>>,
}

impl MockTracker {
    /// Create a new mock for a GitLab project
    pub fn new(project: &str) -> Self {
        Self {
            project: project.to_string(),
            next_comment_id: AtomicU64::new(1),
            merge_requests: Mutex::new(Vec::new()),
            comment_calls: Mutex::new(Vec::new()),
            find_calls: Mutex::new(Vec::new()),
            error_on_comment: Mutex::new(None),
        }
    }

    /// Set the list `find_latest_merge_request` sees, in service order.
    ///
    /// The mock does no filtering: the first entry is what a real service
    /// would have returned first for the requested branch.
    pub fn set_merge_requests(&self, mrs: Vec<MergeRequest>) {
        *self.merge_requests.lock().unwrap() = mrs;
    }

    /// Make comment creation return an error
    pub fn fail_comments(&self, msg: &str) {
        *self.error_on_comment.lock().unwrap() = Some(msg.to_string());
    }

    /// All comment calls
    pub fn get_comment_calls(&self) -> Vec<CommentCall> {
        self.comment_calls.lock().unwrap().clone()
    }

    /// All source branches `find_latest_merge_request` was called with
    pub fn get_find_calls(&self) -> Vec<Option<String>> {
        self.find_calls.lock().unwrap().clone()
    }

    fn record(&self, call: CommentCall) -> Result<PostedComment> {
        self.comment_calls.lock().unwrap().push(call);

        if let Some(msg) = self.error_on_comment.lock().unwrap().as_ref() {
            return Err(Error::GitLabApi(msg.clone()));
        }

        let id = self.next_comment_id.fetch_add(1, Ordering::SeqCst);
        Ok(PostedComment {
            id,
            html_url: format!("https://gitlab.com/{}#note_{id}", self.project),
        })
    }
}

#[async_trait]
impl IssueTracker for MockTracker {
    async fn create_issue_comment(&self, issue: u64, body: &str) -> Result<PostedComment> {
        self.record(CommentCall::Issue {
            number: issue,
            body: body.to_string(),
        })
    }
}

#[async_trait]
impl MergeRequestTracker for MockTracker {
    async fn create_merge_request_comment(
        &self,
        merge_request: u64,
        body: &str,
    ) -> Result<PostedComment> {
        self.record(CommentCall::MergeRequest {
            number: merge_request,
            body: body.to_string(),
        })
    }

    async fn find_latest_merge_request(
        &self,
        source_branch: Option<&str>,
    ) -> Result<Option<MergeRequest>> {
        self.find_calls
            .lock()
            .unwrap()
            .push(source_branch.map(ToString::to_string));

        Ok(self.merge_requests.lock().unwrap().first().cloned())
    }
}

/// Text generator that records prompts and answers with a fixed string
pub struct MockGenerator {
    response: String,
    prompts: Mutex<Vec<String>>,
    parameters: Mutex<Vec<GenerationParameters>>,
}

impl MockGenerator {
    /// Create a generator answering with `response`
    pub fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
            prompts: Mutex::new(Vec::new()),
            parameters: Mutex::new(Vec::new()),
        }
    }

    /// Prompts received so far
    pub fn get_prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    /// Parameters received so far
    pub fn get_parameters(&self) -> Vec<GenerationParameters> {
        self.parameters.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn predict(&self, prompt: &str, parameters: &GenerationParameters) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.parameters.lock().unwrap().push(*parameters);
        Ok(self.response.clone())
    }
}
