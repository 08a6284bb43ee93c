use actix_web::HttpResponse;
use serde_json::{json, Value};

pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

fn ok_and_error(description: &str, success: Value) -> Value {
    json!({
        "200": success,
        "500": {
            "description": description,
            "content": { "application/json": { "schema": { "$ref": "#/components/schemas/Error" } } }
        }
    })
}

fn json_body(schema_ref: &str) -> Value {
    json!({
        "required": true,
        "content": { "application/json": { "schema": { "$ref": schema_ref } } }
    })
}

fn returns(description: &str, schema: Value) -> Value {
    json!({
        "description": description,
        "content": { "application/json": { "schema": schema } }
    })
}

fn employee_id_param() -> Value {
    json!({
        "in": "path",
        "name": "id",
        "required": true,
        "description": "id of the employee",
        "schema": { "type": "integer" },
        "example": 2
    })
}

fn schemas() -> Value {
    json!({
        "Employee": {
            "type": "object",
            "properties": {
                "name": { "type": "string", "description": "name of the employee", "example": "Jeson Elliot" },
                "date_of_joining": { "type": "string", "format": "date", "description": "date of joining of the employee", "example": "2021-01-30" },
                "designation": { "type": "string", "description": "designation of the employee", "example": "Software Engineer" },
                "gender": { "type": "string", "description": "gender of the employee", "example": "male" },
                "email": { "type": "string", "description": "email of the employee", "example": "jeson.dev@gmail.com" },
                "bio": { "type": "string", "description": "biography of the employee", "example": "Currently, staying in Sydney" }
            }
        },
        "EmployeeRow": {
            "allOf": [
                { "$ref": "#/components/schemas/Employee" },
                { "type": "object", "properties": { "id": { "type": "integer", "example": 1 } } }
            ]
        },
        "Team": {
            "type": "object",
            "properties": {
                "name": { "type": "string", "example": "Platform" },
                "email": { "type": "string", "example": "platform@example.com" },
                "description": { "type": "string", "example": "Owns the shared infrastructure" }
            }
        },
        "TeamRow": {
            "allOf": [
                { "$ref": "#/components/schemas/Team" },
                { "type": "object", "properties": { "id": { "type": "integer", "example": 1 } } }
            ]
        },
        "EmployeeAssignment": {
            "type": "object",
            "properties": {
                "employee_id": { "type": "integer", "example": 1 },
                "team_id": { "type": "integer", "example": 1 }
            }
        },
        "EmployeeAssignmentRow": {
            "allOf": [
                { "$ref": "#/components/schemas/EmployeeAssignment" },
                { "type": "object", "properties": { "id": { "type": "integer", "example": 1 } } }
            ]
        },
        "Error": {
            "type": "object",
            "properties": {
                "error": { "type": "string" },
                "code": { "type": "string", "description": "SQLSTATE reported by the database" },
                "detail": { "type": "string" },
                "hint": { "type": "string" },
                "constraint": { "type": "string" },
                "table": { "type": "string" },
                "column": { "type": "string" }
            }
        }
    })
}

fn paths() -> Value {
    let employee_row = json!({ "$ref": "#/components/schemas/EmployeeRow" });
    let employee_rows = json!({ "type": "array", "items": employee_row });

    json!({
        "/employee": {
            "post": {
                "summary": "create employee",
                "description": "create employee for the organisation",
                "requestBody": json_body("#/components/schemas/Employee"),
                "responses": ok_and_error(
                    "failure in creating employee",
                    returns("Employee created successfully", employee_row.clone()),
                )
            }
        },
        "/employees": {
            "get": {
                "summary": "get all employees",
                "description": "get all employees",
                "responses": ok_and_error("error", returns("success", employee_rows.clone()))
            }
        },
        "/employee/{id}": {
            "get": {
                "summary": "get employee",
                "description": "list holding the matching employee, empty when no employee has the id",
                "parameters": [employee_id_param()],
                "responses": ok_and_error("error", returns("success", employee_rows))
            },
            "put": {
                "summary": "update employee",
                "description": "replace every field of the employee; empty body when no employee has the id",
                "parameters": [employee_id_param()],
                "requestBody": json_body("#/components/schemas/Employee"),
                "responses": ok_and_error("error", returns("success", employee_row))
            },
            "delete": {
                "summary": "delete employee",
                "description": "delete employee",
                "parameters": [employee_id_param()],
                "responses": ok_and_error(
                    "error",
                    returns(
                        "success",
                        json!({ "type": "string", "example": "Successfully deleted employee with ID - 2" }),
                    ),
                )
            }
        },
        "/team": {
            "post": {
                "summary": "create team",
                "requestBody": json_body("#/components/schemas/Team"),
                "responses": ok_and_error(
                    "failure in creating team",
                    returns("Team created successfully", json!({ "$ref": "#/components/schemas/TeamRow" })),
                )
            }
        },
        "/teams": {
            "get": {
                "summary": "get all teams",
                "responses": ok_and_error(
                    "error",
                    returns(
                        "success",
                        json!({ "type": "array", "items": { "$ref": "#/components/schemas/TeamRow" } }),
                    ),
                )
            }
        },
        "/employeeassignment": {
            "post": {
                "summary": "assign employee to team",
                "requestBody": json_body("#/components/schemas/EmployeeAssignment"),
                "responses": ok_and_error(
                    "failure in creating assignment",
                    returns(
                        "Assignment created successfully",
                        json!({ "$ref": "#/components/schemas/EmployeeAssignmentRow" }),
                    ),
                )
            }
        }
    })
}

/// OpenAPI 3.0 description of every route the server registers.
pub fn openapi_document() -> Value {
    json!({
        "openapi": "3.0.0",
        "info": {
            "title": "Employee Management API",
            "version": env!("CARGO_PKG_VERSION"),
            "description": "Employee Api for employee management"
        },
        "paths": paths(),
        "components": { "schemas": schemas() }
    })
}

pub async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(openapi_document())
}

fn swagger_page() -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>Employee Management API</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
  <script>
    window.onload = () => {{
      window.ui = SwaggerUIBundle({{ url: "{}", dom_id: "#swagger-ui" }});
    }};
  </script>
</body>
</html>"##,
        OPENAPI_PATH
    )
}

pub async fn swagger_ui() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(swagger_page())
}
