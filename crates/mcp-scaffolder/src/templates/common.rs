//! Files shared by every project: package manifest, tsconfig, ignore file, env example

use crate::options::Framework;
use serde_json::{json, Map, Value};

const GITIGNORE: &str = include_str!("../../templates/common/gitignore.tmpl");

const ZOD: (&str, &str) = ("zod", "^4.3.5");
const TYPESCRIPT: (&str, &str) = ("typescript", "^5.9.3");
const INSPECTOR: (&str, &str) = ("@modelcontextprotocol/inspector", "^0.18.0");

const OAUTH_ENV: &str = "
# OAuth Configuration
# Issuer URL - your OAuth provider's base URL
# Examples:
#   Auth0: https://your-tenant.auth0.com
#   Keycloak: http://localhost:8080/realms/your-realm
OAUTH_ISSUER_URL=https://your-oauth-provider.com

# Audience - the API identifier (optional, but recommended)
# This should match the \"aud\" claim in your JWT tokens
OAUTH_AUDIENCE=https://your-mcp-server.com
";

fn dependency_map(entries: &[(&str, &str)]) -> Value {
    Value::Object(
        entries
            .iter()
            .map(|(name, version)| (name.to_string(), Value::String(version.to_string())))
            .collect::<Map<String, Value>>(),
    )
}

/// `package.json`; the dependency set depends on the framework and OAuth
pub fn package_json(project_name: &str, framework: Framework, with_oauth: bool) -> String {
    let (dependencies, dev_dependencies) = match framework {
        Framework::FastMcp => (
            vec![("fastmcp", "^3.26.8"), ZOD],
            vec![TYPESCRIPT, INSPECTOR],
        ),
        Framework::Sdk => {
            let mut deps = vec![
                ("@modelcontextprotocol/sdk", "^1.25.1"),
                ("express", "^5.2.1"),
                ZOD,
            ];
            if with_oauth {
                deps.push(("dotenv", "^17.2.3"));
                deps.push(("jose", "^6.1.3"));
            }
            (
                deps,
                vec![
                    ("@types/express", "^5.0.2"),
                    ("@types/node", "^22.15.21"),
                    TYPESCRIPT,
                    INSPECTOR,
                ],
            )
        }
    };

    let manifest = json!({
        "name": project_name,
        "version": "0.1.0",
        "type": "module",
        "main": "dist/index.js",
        "scripts": {
            "build": "tsc",
            "dev": "tsc && node dist/index.js",
            "start": "node dist/index.js",
            "inspect": "mcp-inspector http://localhost:3000/mcp",
        },
        "dependencies": dependency_map(&dependencies),
        "devDependencies": dependency_map(&dev_dependencies),
        "engines": {
            "node": ">=20",
        },
    });

    format!("{:#}\n", manifest)
}

/// `tsconfig.json`
pub fn tsconfig() -> String {
    let config = json!({
        "compilerOptions": {
            "target": "ES2022",
            "module": "NodeNext",
            "moduleResolution": "NodeNext",
            "outDir": "./dist",
            "rootDir": "./src",
            "strict": true,
            "esModuleInterop": true,
            "skipLibCheck": true,
            "forceConsistentCasingInFileNames": true,
            "declaration": true,
        },
        "include": ["src/**/*"],
        "exclude": ["node_modules", "dist"],
    });

    format!("{:#}\n", config)
}

/// `.gitignore`
pub fn gitignore() -> String {
    GITIGNORE.to_string()
}

/// `.env.example`; the OAuth block is present only for OAuth projects
pub fn env_example(with_oauth: bool) -> String {
    let oauth_vars = if with_oauth { OAUTH_ENV } else { "" };
    format!("PORT=3000\n{oauth_vars}")
}
