//! Built-in template texts, embedded from `templates/` at build time.

use goskel_core::domain::{Template, TemplateId};

const ENTITY: &str = include_str!("../../templates/entity.tmpl");
const REPOSITORY: &str = include_str!("../../templates/repository.tmpl");
const SERVICE_INTERFACE: &str = include_str!("../../templates/service-interface.tmpl");
const SERVICE_IMPL: &str = include_str!("../../templates/service-impl.tmpl");
const USECASE_MODELS: &str = include_str!("../../templates/usecase-models.tmpl");
const HTTP_HANDLER: &str = include_str!("../../templates/http-handler.tmpl");
const GRPC_HANDLER: &str = include_str!("../../templates/grpc-handler.tmpl");
const TEST_STUB: &str = include_str!("../../templates/test-stub.tmpl");
const MOCK_STUB: &str = include_str!("../../templates/mock-stub.tmpl");
const LINT_CONFIG: &str = include_str!("../../templates/lint-config.tmpl");
const RELOAD_CONFIG: &str = include_str!("../../templates/reload-config.tmpl");
const SHARED_PACKAGE: &str = include_str!("../../templates/shared-package.tmpl");
const CONFIG_PACKAGE: &str = include_str!("../../templates/config-package.tmpl");
const GO_MODULE: &str = include_str!("../../templates/go-module.tmpl");
const MAIN_NET_HTTP: &str = include_str!("../../templates/main-net-http.tmpl");
const MAIN_GIN: &str = include_str!("../../templates/main-gin.tmpl");
const MAIN_ECHO: &str = include_str!("../../templates/main-echo.tmpl");
const MAIN_CHI: &str = include_str!("../../templates/main-chi.tmpl");

/// Embedded text for `id`. The match is exhaustive, so every id has one.
pub const fn builtin_text(id: TemplateId) -> &'static str {
    match id {
        TemplateId::Entity => ENTITY,
        TemplateId::Repository => REPOSITORY,
        TemplateId::ServiceInterface => SERVICE_INTERFACE,
        TemplateId::ServiceImpl => SERVICE_IMPL,
        TemplateId::UsecaseModels => USECASE_MODELS,
        TemplateId::HttpHandler => HTTP_HANDLER,
        TemplateId::GrpcHandler => GRPC_HANDLER,
        TemplateId::TestStub => TEST_STUB,
        TemplateId::MockStub => MOCK_STUB,
        TemplateId::LintConfig => LINT_CONFIG,
        TemplateId::ReloadConfig => RELOAD_CONFIG,
        TemplateId::SharedPackage => SHARED_PACKAGE,
        TemplateId::ConfigPackage => CONFIG_PACKAGE,
        TemplateId::GoModule => GO_MODULE,
        TemplateId::MainNetHttp => MAIN_NET_HTTP,
        TemplateId::MainGin => MAIN_GIN,
        TemplateId::MainEcho => MAIN_ECHO,
        TemplateId::MainChi => MAIN_CHI,
    }
}

/// Every built-in template, in `TemplateId` order.
pub fn all_templates() -> Vec<Template> {
    TemplateId::ALL
        .into_iter()
        .map(|id| Template::builtin(id, builtin_text(id)))
        .collect()
}
