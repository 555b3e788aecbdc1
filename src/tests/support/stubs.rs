use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::helpers::UserIdentityResolver;
use crate::auth::application::ports::outgoing::{AccountHandle, UserQuery, UserQueryError};
use crate::modules::media::application::domain::entities::UploadedAsset;
use crate::modules::media::application::ports::incoming::use_cases::{
    DeleteImageError, DeleteImageUseCase, UploadImagesCommand, UploadImagesError,
    UploadImagesUseCase,
};
use crate::modules::portfolio::application::domain::customization::CustomizationPatch;
use crate::modules::portfolio::application::domain::entities::Portfolio;
use crate::modules::portfolio::application::domain::render::RenderMode;
use crate::modules::portfolio::application::domain::section_edit::SectionEdit;
use crate::modules::portfolio::application::ports::incoming::use_cases::*;
use crate::modules::template::application::domain::entities::Template;
use crate::modules::template::application::ports::incoming::use_cases::*;
use crate::modules::template::application::ports::outgoing::{
    CreateTemplateData, PatchTemplateData, TemplateListFilter,
};

/* --------------------------------------------------- */
/* User lookup                                         */
/* --------------------------------------------------- */

/// Knows no users unless constructed with one.
#[derive(Default, Clone)]
pub struct StubUserQuery {
    user: Option<AccountHandle>,
}

impl StubUserQuery {
    pub fn with_user(username: &str, id: Uuid) -> Self {
        Self {
            user: Some(AccountHandle {
                id,
                username: username.to_string(),
                is_deleted: false,
            }),
        }
    }
}

#[async_trait]
impl UserQuery for StubUserQuery {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<AccountHandle>, UserQueryError> {
        Ok(self.user.clone().filter(|u| u.username == username))
    }
}

pub fn resolver_with_user(username: &str, id: Uuid) -> UserIdentityResolver {
    UserIdentityResolver::new(Arc::new(StubUserQuery::with_user(username, id)))
}

/* --------------------------------------------------- */
/* Templates                                           */
/* --------------------------------------------------- */

#[derive(Default, Clone)]
pub struct StubCreateTemplateUseCase;

#[async_trait]
impl CreateTemplateUseCase for StubCreateTemplateUseCase {
    async fn execute(&self, _data: CreateTemplateData) -> Result<Template, CreateTemplateError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubPatchTemplateUseCase;

#[async_trait]
impl PatchTemplateUseCase for StubPatchTemplateUseCase {
    async fn execute(
        &self,
        _template_id: Uuid,
        _data: PatchTemplateData,
    ) -> Result<Template, PatchTemplateError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteTemplateUseCase;

#[async_trait]
impl DeleteTemplateUseCase for StubDeleteTemplateUseCase {
    async fn execute(&self, _template_id: Uuid) -> Result<(), DeleteTemplateError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetTemplateUseCase;

#[async_trait]
impl GetTemplateUseCase for StubGetTemplateUseCase {
    async fn execute(
        &self,
        _template_id: Uuid,
        _include_inactive: bool,
    ) -> Result<Template, GetTemplateError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListTemplatesUseCase;

#[async_trait]
impl ListTemplatesUseCase for StubListTemplatesUseCase {
    async fn execute(&self, _filter: TemplateListFilter) -> Result<Vec<Template>, ListTemplatesError> {
        Ok(vec![])
    }
}

/* --------------------------------------------------- */
/* Portfolios                                          */
/* --------------------------------------------------- */

#[derive(Default, Clone)]
pub struct StubCreatePortfolioUseCase;

#[async_trait]
impl CreatePortfolioUseCase for StubCreatePortfolioUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _input: CreatePortfolioInput,
    ) -> Result<Portfolio, CreatePortfolioError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetPortfolioUseCase;

#[async_trait]
impl GetPortfolioUseCase for StubGetPortfolioUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _portfolio_id: Uuid,
    ) -> Result<Portfolio, GetPortfolioError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListPortfoliosUseCase;

#[async_trait]
impl ListPortfoliosUseCase for StubListPortfoliosUseCase {
    async fn execute(&self, _owner: UserId) -> Result<Vec<Portfolio>, ListPortfoliosError> {
        Ok(vec![])
    }
}

#[derive(Default, Clone)]
pub struct StubCustomizePortfolioUseCase;

#[async_trait]
impl CustomizePortfolioUseCase for StubCustomizePortfolioUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _portfolio_id: Uuid,
        _patch: CustomizationPatch,
    ) -> Result<Portfolio, CustomizePortfolioError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubEditSectionsUseCase;

#[async_trait]
impl EditSectionsUseCase for StubEditSectionsUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _portfolio_id: Uuid,
        _section_id: &str,
        _edits: Vec<SectionEdit>,
    ) -> Result<Portfolio, EditSectionsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubPublishPortfolioUseCase;

#[async_trait]
impl PublishPortfolioUseCase for StubPublishPortfolioUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _portfolio_id: Uuid,
    ) -> Result<Portfolio, PublishPortfolioError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUnpublishPortfolioUseCase;

#[async_trait]
impl UnpublishPortfolioUseCase for StubUnpublishPortfolioUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _portfolio_id: Uuid,
    ) -> Result<Portfolio, UnpublishPortfolioError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDuplicatePortfolioUseCase;

#[async_trait]
impl DuplicatePortfolioUseCase for StubDuplicatePortfolioUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _portfolio_id: Uuid,
    ) -> Result<Portfolio, DuplicatePortfolioError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeletePortfolioUseCase;

#[async_trait]
impl DeletePortfolioUseCase for StubDeletePortfolioUseCase {
    async fn execute(&self, _owner: UserId, _portfolio_id: Uuid) -> Result<(), DeletePortfolioError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubRenderPortfolioUseCase;

#[async_trait]
impl RenderPortfolioUseCase for StubRenderPortfolioUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _portfolio_id: Uuid,
        _mode: RenderMode,
    ) -> Result<RenderedPortfolio, RenderPortfolioError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetPublicPortfolioUseCase;

#[async_trait]
impl GetPublicPortfolioUseCase for StubGetPublicPortfolioUseCase {
    async fn execute(
        &self,
        _request: PublicPortfolioRequest,
    ) -> Result<PublicPortfolio, GetPublicPortfolioError> {
        Err(GetPublicPortfolioError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubRecordShareUseCase;

#[async_trait]
impl RecordShareUseCase for StubRecordShareUseCase {
    async fn execute(&self, _owner: UserId, _slug: &str) -> Result<(), RecordShareError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubSubmitContactUseCase;

#[async_trait]
impl SubmitContactUseCase for StubSubmitContactUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _slug: &str,
        _form: ContactForm,
    ) -> Result<(), SubmitContactError> {
        unimplemented!("Not used in this test")
    }
}

/* --------------------------------------------------- */
/* Media                                               */
/* --------------------------------------------------- */

#[derive(Default, Clone)]
pub struct StubUploadImagesUseCase;

#[async_trait]
impl UploadImagesUseCase for StubUploadImagesUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _command: UploadImagesCommand,
    ) -> Result<Vec<UploadedAsset>, UploadImagesError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteImageUseCase;

#[async_trait]
impl DeleteImageUseCase for StubDeleteImageUseCase {
    async fn execute(&self, _owner: UserId, _public_id: &str) -> Result<(), DeleteImageError> {
        unimplemented!("Not used in this test")
    }
}
