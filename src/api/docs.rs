//! Static OpenAPI document served at `/api-docs`

use serde_json::{json, Value};

use crate::api::handlers::RUNNING_MESSAGE;
use crate::api::{DOCS_PATH, HEALTH_PATH, LOGS_PATH};
use crate::logs::SAMPLE_LOGS;

pub fn openapi_document(server_url: &str) -> Value {
    json!({
        "openapi": "3.0.0",
        "info": {
            "title": "SDET Challenge API",
            "version": "1.0.0",
            "description": "API for SDET automation testing challenges. Provides log data for parsing and analysis.",
            "contact": { "name": "SDET Challenge" }
        },
        "servers": [
            { "url": server_url, "description": "Development server" }
        ],
        "paths": {
            LOGS_PATH: {
                "get": {
                    "summary": "Retrieve application logs",
                    "description": "Returns a collection of log entries. Each entry starts with a bracketed level (INFO, ERROR, WARN), followed by a timestamp and message.",
                    "tags": ["Logs"],
                    "responses": {
                        "200": {
                            "description": "Successfully retrieved logs",
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/LogsResponse" }
                                }
                            }
                        }
                    }
                }
            },
            HEALTH_PATH: {
                "get": {
                    "summary": "Health check and API information",
                    "description": "Returns the status of the API and available endpoints.",
                    "tags": ["Health"],
                    "responses": {
                        "200": {
                            "description": "API is running successfully",
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/HealthResponse" }
                                }
                            }
                        }
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "LogsResponse": {
                    "type": "object",
                    "properties": {
                        "logs": {
                            "type": "array",
                            "items": { "type": "string", "example": SAMPLE_LOGS[0] },
                            "description": "Log entries with timestamps and messages"
                        }
                    },
                    "example": { "logs": SAMPLE_LOGS }
                },
                "HealthResponse": {
                    "type": "object",
                    "properties": {
                        "message": { "type": "string", "example": RUNNING_MESSAGE },
                        "endpoints": {
                            "type": "object",
                            "properties": {
                                "logs": { "type": "string", "example": LOGS_PATH },
                                "docs": { "type": "string", "example": DOCS_PATH }
                            }
                        }
                    }
                }
            }
        }
    })
}
