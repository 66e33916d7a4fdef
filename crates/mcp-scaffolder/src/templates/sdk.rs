//! Official MCP SDK server sources (Express + streamable HTTP transport)

use super::{command_vars, render};
use crate::options::PackageManager;

const STATELESS_SERVER: &str = include_str!("../../templates/sdk/stateless/server.ts.tmpl");
const STATELESS_INDEX: &str = include_str!("../../templates/sdk/stateless/index.ts.tmpl");
const STATELESS_README: &str = include_str!("../../templates/sdk/stateless/README.md.tmpl");

const STATEFUL_SERVER: &str = include_str!("../../templates/sdk/stateful/server.ts.tmpl");
const STATEFUL_INDEX: &str = include_str!("../../templates/sdk/stateful/index.ts.tmpl");
const STATEFUL_README: &str = include_str!("../../templates/sdk/stateful/README.md.tmpl");
const OAUTH_STARTUP: &str = include_str!("../../templates/sdk/stateful/startup-oauth.ts.tmpl");
const OAUTH_README_SECTION: &str = include_str!("../../templates/sdk/stateful/oauth-section.md.tmpl");
const AUTH: &str = include_str!("../../templates/sdk/stateful/auth.ts.tmpl");

const AUTH_IMPORTS: &str = "
import {
  setupAuthMetadataRouter,
  authMiddleware,
  getOAuthMetadataUrl,
  validateOAuthConfig,
} from './auth.js';";

const METADATA_LOG: &str =
    "\n    console.log(`OAuth metadata available at ${getOAuthMetadataUrl()}`);";

/// `src/server.ts` for the stateless variant
pub fn stateless_server(project_name: &str) -> String {
    render(STATELESS_SERVER, &[("project_name", project_name)])
}

/// `src/index.ts` for the stateless variant: one server per request
pub fn stateless_index() -> String {
    STATELESS_INDEX.to_string()
}

/// `README.md` for the stateless variant
pub fn stateless_readme(project_name: &str, package_manager: PackageManager) -> String {
    let mut vars = vec![("project_name", project_name)];
    vars.extend(command_vars(package_manager));
    render(STATELESS_README, &vars)
}

/// `src/server.ts` for the stateful variant; notifications target the session
pub fn stateful_server(project_name: &str) -> String {
    render(STATEFUL_SERVER, &[("project_name", project_name)])
}

/// `src/index.ts` for the stateful variant.
///
/// With OAuth every `/mcp` route goes through `authMiddleware` and startup
/// waits for OIDC discovery before listening.
pub fn stateful_index(with_oauth: bool) -> String {
    let (auth_imports, auth_middleware, metadata_log, startup) = if with_oauth {
        (
            AUTH_IMPORTS,
            " authMiddleware,",
            METADATA_LOG,
            OAUTH_STARTUP.trim_end(),
        )
    } else {
        ("", "", "", "startServer(PORT);")
    };

    render(
        STATEFUL_INDEX,
        &[
            ("auth_imports", auth_imports),
            ("auth_middleware", auth_middleware),
            ("metadata_log", metadata_log),
            ("startup", startup),
        ],
    )
}

/// `README.md` for the stateful variant
pub fn stateful_readme(
    project_name: &str,
    package_manager: PackageManager,
    with_oauth: bool,
) -> String {
    let description = if with_oauth {
        "A stateful streamable HTTP MCP (Model Context Protocol) server with session management and OAuth authentication."
    } else {
        "A stateful streamable HTTP MCP (Model Context Protocol) server with session management."
    };

    let source_tree = if with_oauth {
        "│   ├── index.ts      # Express app and stateful HTTP transport setup\n\
         │   └── auth.ts       # OAuth configuration and middleware"
    } else {
        "│   └── index.ts      # Express app and stateful HTTP transport setup"
    };

    let (oauth_section, endpoint_auth_note, customization_note) = if with_oauth {
        (
            OAUTH_README_SECTION,
            "\n  - Requires valid Bearer token in Authorization header",
            "\n- Configure OAuth scopes and token verification in `src/auth.ts`",
        )
    } else {
        ("", "", "")
    };

    let mut vars = vec![
        ("project_name", project_name),
        ("description", description),
        ("source_tree", source_tree),
        ("oauth_section", oauth_section),
        ("endpoint_auth_note", endpoint_auth_note),
        ("customization_note", customization_note),
    ];
    vars.extend(command_vars(package_manager));
    render(STATEFUL_README, &vars)
}

/// `src/auth.ts`: bearer-token verification against the issuer's JWKS
pub fn auth() -> String {
    AUTH.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_servers_use_project_name_and_sdk_imports() {
        for text in [stateless_server("test-project"), stateful_server("test-project")] {
            assert!(text.contains("name: 'test-project'"));
            assert!(text.contains("from '@modelcontextprotocol/sdk/types.js'"));
            assert!(text.contains("from '@modelcontextprotocol/sdk/server/mcp.js'"));
            assert!(text.contains("registerPrompt"));
            assert!(text.contains("registerTool"));
            assert!(text.contains("registerResource"));
        }
    }

    #[test]
    fn test_stateful_server_notifies_session() {
        assert!(stateful_server("p").contains("extra.sessionId"));
        assert!(!stateless_server("p").contains("extra.sessionId"));
    }

    #[test]
    fn test_stateless_index_has_no_sessions() {
        let text = stateless_index();
        assert!(text.contains("sessionIdGenerator: undefined"));
        assert!(text.contains("app.post('/mcp'"));
        assert!(text.contains("app.get('/mcp'"));
        assert!(text.contains("app.delete('/mcp'"));
        assert!(text.contains("process.env.PORT || 3000"));
        assert!(!text.contains("mcp-session-id"));
    }

    #[test]
    fn test_stateful_index_sessions() {
        let text = stateful_index(false);
        assert!(text.contains("createMcpExpressApp"));
        assert!(text.contains("mcp-session-id"));
        assert!(text.contains("transports[sessionId] = transport"));
        assert!(text.contains("isInitializeRequest(req.body)"));
        assert!(text.contains("randomUUID()"));
        assert!(text.contains("transport.onclose"));
        assert!(text.contains("process.on('SIGINT'"));
        assert!(text.contains("\nstartServer(PORT);\n"));
    }

    #[test]
    fn test_stateful_index_without_oauth() {
        let text = stateful_index(false);
        assert!(!text.contains("./auth.js"));
        assert!(!text.contains("authMiddleware"));
        assert!(!text.contains("async function main()"));
        assert!(text.contains("app.post('/mcp', async (req: Request, res: Response)"));
        assert!(!text.contains("{{"));
    }

    #[test]
    fn test_stateful_index_with_oauth() {
        let text = stateful_index(true);
        assert!(text.contains("} from './auth.js';"));
        assert!(text.contains("validateOAuthConfig"));
        assert!(text.contains("setupAuthMetadataRouter(app);"));
        assert!(text.contains("app.post('/mcp', authMiddleware, async"));
        assert!(text.contains("app.get('/mcp', authMiddleware, async"));
        assert!(text.contains("app.delete('/mcp', authMiddleware, async"));
        assert!(text.contains("OAuth metadata available at ${getOAuthMetadataUrl()}"));
        assert!(text.contains("async function main()"));
        assert!(text.contains("process.exit(1)"));

        let validate = text.find("await validateOAuthConfig();").expect("validation call");
        let start = text.find("  startServer(PORT);").expect("start call");
        assert!(validate < start);
    }

    #[test]
    fn test_readmes() {
        let text = stateless_readme("p", PackageManager::Npm);
        assert!(text.starts_with("# p\n"));
        assert!(text.contains("npm install"));
        assert!(text.contains("npm run dev"));
        assert!(text.contains("/mcp"));

        let text = stateful_readme("p", PackageManager::Yarn, false);
        assert!(text.contains("Session Management"));
        assert!(text.contains("GET /mcp"));
        assert!(text.contains("DELETE /mcp"));
        assert!(text.contains("yarn dev"));
        assert!(!text.contains("OAuth"));
        assert!(!text.contains("auth.ts"));
        assert!(!text.contains("{{"));
    }

    #[test]
    fn test_stateful_readme_with_oauth() {
        let text = stateful_readme("p", PackageManager::Npm, true);
        assert!(text.contains("## OAuth Authentication"));
        assert!(text.contains("Auth0"));
        assert!(text.contains("Keycloak"));
        assert!(text.contains("JWT"));
        assert!(text.contains("auth.ts"));
        assert!(text.contains("Requires valid Bearer token"));
        assert!(text.contains("`https://{tenant}.auth0.com`"));
    }

    #[test]
    fn test_auth_module() {
        let text = auth();
        assert!(text.contains("import 'dotenv/config'"));
        assert!(text.contains("from 'jose'"));
        assert!(text.contains("export function setupAuthMetadataRouter"));
        assert!(text.contains("export const authMiddleware"));
        assert!(text.contains("export function getOAuthMetadataUrl"));
        assert!(text.contains("export async function validateOAuthConfig"));
        assert!(text.contains("createRemoteJWKSet(new URL(jwksUri))"));
        assert!(text.contains(".well-known/openid-configuration"));
        assert!(text.contains("AbortSignal.timeout(5000)"));
        assert!(text.contains("jwtPayload.scope.split(' ')"));
        assert!(text.contains(".replace(/\\/$/, '')"));
    }
}
