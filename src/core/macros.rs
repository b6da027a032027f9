//! 核心宏定义
//!
//! 提供统一的宏来减少配置结构体上的样板代码

/// 为结构体实现Default trait的宏
///
/// 使用示例:
/// ```rust
/// use fireworks_show::impl_default;
///
/// struct Limits {
///     max_fireworks: usize,
///     label: String,
/// }
///
/// impl_default!(Limits {
///     max_fireworks: 8,
///     label: String::new(),
/// });
///
/// assert_eq!(Limits::default().max_fireworks, 8);
/// ```
#[macro_export]
macro_rules! impl_default {
    ($struct_name:ident {
        $($field:ident: $value:expr),* $(,)?
    }) => {
        impl Default for $struct_name {
            fn default() -> Self {
                Self {
                    $($field: $value),*
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {

    struct TestStruct {
        field1: u32,
        field2: String,
    }

    impl_default!(TestStruct {
        field1: 3,
        field2: String::from("stars"),
    });

    #[test]
    fn test_impl_default() {
        let s = TestStruct::default();

        assert_eq!(s.field1, 3);
        assert_eq!(s.field2, "stars");
    }
}
