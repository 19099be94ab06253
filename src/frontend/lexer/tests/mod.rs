//! Lexer tests module
//!
//! - basic: 基础测试（关键字、标识符、空白符、位置）
//! - literals: 八进制字面量测试
//! - errors: 错误处理测试
