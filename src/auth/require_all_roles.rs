use super::{MissingRoleError, Role, User};

///
/// Validates that user has all required roles.
///
/// ### Errors
/// - [MissingRoleError] when any of the roles is missing
///
pub fn require_all_roles(user: &User, roles: &[Role]) -> Result<(), MissingRoleError> {
    for role in roles {
        let role = role.as_ref();
        let found_role = user.roles.iter().any(|user_role| user_role == role);
        if !found_role {
            return Err(MissingRoleError {
                missing_role: role.to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn require_roles_user_has_role() {
        let user = User::new(
            Uuid::new_v4(),
            vec![
                "first_other_application_role".to_string(),
                Role::ProduceNotifications.as_ref().to_string(),
                "second_other_application_role".to_string(),
            ],
        );

        let result = require_all_roles(&user, &[Role::ProduceNotifications]);

        assert!(result.is_ok());
    }

    #[test]
    fn require_roles_user_does_not_have_role() {
        let user = User::new(
            Uuid::new_v4(),
            vec![Role::ProduceNotifications.as_ref().to_string()],
        );

        let err = require_all_roles(&user, &[Role::ProduceNotifications, Role::Admin])
            .unwrap_err();

        assert_eq!(err.missing_role, Role::Admin.as_ref());
    }
}
