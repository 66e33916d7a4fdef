//! Container build files

use super::render;
use crate::options::PackageManager;

const DOCKERFILE: &str = include_str!("../../templates/deployment/Dockerfile.tmpl");
const DOCKERIGNORE: &str = include_str!("../../templates/deployment/dockerignore.tmpl");

/// Package-manager specific commands used inside the container build
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DockerConfig {
    pub lock_file: &'static str,
    pub install: &'static str,
    pub install_prod: &'static str,
    pub build: &'static str,
    pub setup: Option<&'static str>,
}

pub fn docker_config(package_manager: PackageManager) -> DockerConfig {
    match package_manager {
        PackageManager::Npm => DockerConfig {
            lock_file: "package-lock.json",
            install: "npm ci",
            install_prod: "npm ci --omit=dev",
            build: "npm run build",
            setup: None,
        },
        PackageManager::Pnpm => DockerConfig {
            lock_file: "pnpm-lock.yaml",
            install: "pnpm install --frozen-lockfile",
            install_prod: "pnpm install --frozen-lockfile --prod",
            build: "pnpm run build",
            setup: Some("RUN corepack enable && corepack prepare pnpm@latest --activate"),
        },
        PackageManager::Yarn => DockerConfig {
            lock_file: "yarn.lock",
            install: "yarn install --frozen-lockfile",
            install_prod: "yarn install --frozen-lockfile --production",
            build: "yarn build",
            setup: Some("RUN corepack enable"),
        },
    }
}

/// Multi-stage `Dockerfile`
pub fn dockerfile(package_manager: PackageManager) -> String {
    let config = docker_config(package_manager);
    let setup_step = config
        .setup
        .map(|setup| format!("\n{setup}\n"))
        .unwrap_or_default();

    render(
        DOCKERFILE,
        &[
            ("setup_step", setup_step.as_str()),
            ("lock_file", config.lock_file),
            ("install", config.install),
            ("install_prod", config.install_prod),
            ("build", config.build),
        ],
    )
}

/// `.dockerignore`
pub fn dockerignore() -> String {
    DOCKERIGNORE.to_string()
}
