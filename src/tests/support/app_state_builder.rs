use std::sync::Arc;

use actix_web::web;
use uuid::Uuid;

use crate::auth::application::helpers::UserIdentityResolver;
use crate::modules::media::application::media_use_cases::MediaUseCases;
use crate::modules::media::application::ports::incoming::use_cases::{
    DeleteImageUseCase, UploadImagesUseCase,
};
use crate::modules::portfolio::application::portfolio_use_cases::PortfolioUseCases;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    CreatePortfolioUseCase, CustomizePortfolioUseCase, DeletePortfolioUseCase,
    DuplicatePortfolioUseCase, EditSectionsUseCase, GetPortfolioUseCase,
    GetPublicPortfolioUseCase, ListPortfoliosUseCase, PublishPortfolioUseCase,
    RecordShareUseCase, RenderPortfolioUseCase, SubmitContactUseCase, UnpublishPortfolioUseCase,
};
use crate::modules::template::application::ports::incoming::use_cases::{
    CreateTemplateUseCase, DeleteTemplateUseCase, GetTemplateUseCase, ListTemplatesUseCase,
    PatchTemplateUseCase,
};
use crate::modules::template::application::template_use_cases::TemplateUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Every use case starts as a stub; tests swap in the ones they exercise.
pub struct TestAppStateBuilder {
    template: TemplateUseCases,
    portfolio: PortfolioUseCases,
    media: MediaUseCases,
    user_identity_resolver: UserIdentityResolver,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            template: TemplateUseCases {
                create: Arc::new(StubCreateTemplateUseCase),
                patch: Arc::new(StubPatchTemplateUseCase),
                delete: Arc::new(StubDeleteTemplateUseCase),
                get: Arc::new(StubGetTemplateUseCase),
                list: Arc::new(StubListTemplatesUseCase),
            },
            portfolio: PortfolioUseCases {
                create: Arc::new(StubCreatePortfolioUseCase),
                get: Arc::new(StubGetPortfolioUseCase),
                list: Arc::new(StubListPortfoliosUseCase),
                customize: Arc::new(StubCustomizePortfolioUseCase),
                edit_sections: Arc::new(StubEditSectionsUseCase),
                publish: Arc::new(StubPublishPortfolioUseCase),
                unpublish: Arc::new(StubUnpublishPortfolioUseCase),
                duplicate: Arc::new(StubDuplicatePortfolioUseCase),
                delete: Arc::new(StubDeletePortfolioUseCase),
                render: Arc::new(StubRenderPortfolioUseCase),
                get_public: Arc::new(StubGetPublicPortfolioUseCase),
                record_share: Arc::new(StubRecordShareUseCase),
                submit_contact: Arc::new(StubSubmitContactUseCase),
            },
            media: MediaUseCases {
                upload: Arc::new(StubUploadImagesUseCase),
                delete: Arc::new(StubDeleteImageUseCase),
            },
            user_identity_resolver: resolver_with_user("nobody", Uuid::nil()),
        }
    }
}

impl TestAppStateBuilder {
    /* ---------------- templates ---------------- */

    pub fn with_create_template(
        mut self,
        uc: impl CreateTemplateUseCase + Send + Sync + 'static,
    ) -> Self {
        self.template.create = Arc::new(uc);
        self
    }

    pub fn with_patch_template(
        mut self,
        uc: impl PatchTemplateUseCase + Send + Sync + 'static,
    ) -> Self {
        self.template.patch = Arc::new(uc);
        self
    }

    pub fn with_delete_template(
        mut self,
        uc: impl DeleteTemplateUseCase + Send + Sync + 'static,
    ) -> Self {
        self.template.delete = Arc::new(uc);
        self
    }

    pub fn with_get_template(mut self, uc: impl GetTemplateUseCase + Send + Sync + 'static) -> Self {
        self.template.get = Arc::new(uc);
        self
    }

    pub fn with_list_templates(
        mut self,
        uc: impl ListTemplatesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.template.list = Arc::new(uc);
        self
    }

    /* ---------------- portfolios ---------------- */

    pub fn with_create_portfolio(
        mut self,
        uc: impl CreatePortfolioUseCase + Send + Sync + 'static,
    ) -> Self {
        self.portfolio.create = Arc::new(uc);
        self
    }

    pub fn with_get_portfolio(
        mut self,
        uc: impl GetPortfolioUseCase + Send + Sync + 'static,
    ) -> Self {
        self.portfolio.get = Arc::new(uc);
        self
    }

    pub fn with_list_portfolios(
        mut self,
        uc: impl ListPortfoliosUseCase + Send + Sync + 'static,
    ) -> Self {
        self.portfolio.list = Arc::new(uc);
        self
    }

    pub fn with_customize_portfolio(
        mut self,
        uc: impl CustomizePortfolioUseCase + Send + Sync + 'static,
    ) -> Self {
        self.portfolio.customize = Arc::new(uc);
        self
    }

    pub fn with_edit_sections(
        mut self,
        uc: impl EditSectionsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.portfolio.edit_sections = Arc::new(uc);
        self
    }

    pub fn with_publish_portfolio(
        mut self,
        uc: impl PublishPortfolioUseCase + Send + Sync + 'static,
    ) -> Self {
        self.portfolio.publish = Arc::new(uc);
        self
    }

    pub fn with_unpublish_portfolio(
        mut self,
        uc: impl UnpublishPortfolioUseCase + Send + Sync + 'static,
    ) -> Self {
        self.portfolio.unpublish = Arc::new(uc);
        self
    }

    pub fn with_duplicate_portfolio(
        mut self,
        uc: impl DuplicatePortfolioUseCase + Send + Sync + 'static,
    ) -> Self {
        self.portfolio.duplicate = Arc::new(uc);
        self
    }

    pub fn with_delete_portfolio(
        mut self,
        uc: impl DeletePortfolioUseCase + Send + Sync + 'static,
    ) -> Self {
        self.portfolio.delete = Arc::new(uc);
        self
    }

    pub fn with_render_portfolio(
        mut self,
        uc: impl RenderPortfolioUseCase + Send + Sync + 'static,
    ) -> Self {
        self.portfolio.render = Arc::new(uc);
        self
    }

    pub fn with_get_public_portfolio(
        mut self,
        uc: impl GetPublicPortfolioUseCase + Send + Sync + 'static,
    ) -> Self {
        self.portfolio.get_public = Arc::new(uc);
        self
    }

    pub fn with_record_share(mut self, uc: impl RecordShareUseCase + Send + Sync + 'static) -> Self {
        self.portfolio.record_share = Arc::new(uc);
        self
    }

    pub fn with_submit_contact(
        mut self,
        uc: impl SubmitContactUseCase + Send + Sync + 'static,
    ) -> Self {
        self.portfolio.submit_contact = Arc::new(uc);
        self
    }

    /* ---------------- media ---------------- */

    pub fn with_upload_images(
        mut self,
        uc: impl UploadImagesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.media.upload = Arc::new(uc);
        self
    }

    pub fn with_delete_image(mut self, uc: impl DeleteImageUseCase + Send + Sync + 'static) -> Self {
        self.media.delete = Arc::new(uc);
        self
    }

    /* ---------------- users ---------------- */

    pub fn with_user_identity_resolver(mut self, resolver: UserIdentityResolver) -> Self {
        self.user_identity_resolver = resolver;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            template: self.template,
            portfolio: self.portfolio,
            media: self.media,
            user_identity_resolver: self.user_identity_resolver,
        })
    }
}
