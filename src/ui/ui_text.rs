/// All user-facing copy in one place.
pub struct UiText {
    // Landing
    pub app_name: &'static str,
    pub landing_tagline: &'static str,
    pub landing_get_started: &'static str,
    pub landing_login: &'static str,
    pub feature_nearby: &'static str,
    pub feature_match: &'static str,
    pub feature_chat: &'static str,

    // Login
    pub login_heading: &'static str,
    pub login_sub: &'static str,
    pub login_email_label: &'static str,
    pub login_email_placeholder: &'static str,
    pub login_password_label: &'static str,
    pub login_password_placeholder: &'static str,
    pub login_forgot_link: &'static str,
    pub login_submit: &'static str,
    pub login_pending: &'static str,
    pub login_no_account: &'static str,
    pub login_register_link: &'static str,
    pub login_welcome_prefix: &'static str,

    // Registration wizard
    pub wizard_step_prefix: &'static str,
    pub wizard_name_heading: &'static str,
    pub wizard_name_sub: &'static str,
    pub wizard_name_placeholder: &'static str,
    pub wizard_email_heading: &'static str,
    pub wizard_email_sub: &'static str,
    pub wizard_email_placeholder: &'static str,
    pub wizard_password_heading: &'static str,
    pub wizard_password_sub: &'static str,
    pub wizard_password_placeholder: &'static str,
    pub wizard_confirm_heading: &'static str,
    pub wizard_confirm_sub: &'static str,
    pub wizard_confirm_placeholder: &'static str,
    pub wizard_mismatch_warning: &'static str,
    pub wizard_age_heading: &'static str,
    pub wizard_age_sub: &'static str,
    pub wizard_age_placeholder: &'static str,
    pub wizard_ethnicity_heading: &'static str,
    pub wizard_ethnicity_sub: &'static str,
    pub wizard_ethnicity_placeholder: &'static str,
    pub wizard_bio_heading: &'static str,
    pub wizard_bio_sub: &'static str,
    pub wizard_bio_placeholder: &'static str,
    pub wizard_interests_heading: &'static str,
    pub wizard_interests_sub: &'static str,
    pub wizard_interests_back: &'static str,
    pub wizard_continue: &'static str,
    pub wizard_complete: &'static str,
    pub wizard_welcome_toast: &'static str,

    // Forgot password flow
    pub forgot_email_heading: &'static str,
    pub forgot_email_sub: &'static str,
    pub forgot_send_code: &'static str,
    pub forgot_sending: &'static str,
    pub forgot_otp_heading: &'static str,
    pub forgot_otp_sub_prefix: &'static str,
    pub forgot_otp_label: &'static str,
    pub forgot_resend: &'static str,
    pub forgot_verify: &'static str,
    pub forgot_verifying: &'static str,
    pub forgot_reset_heading: &'static str,
    pub forgot_reset_sub: &'static str,
    pub forgot_new_password_label: &'static str,
    pub forgot_new_password_placeholder: &'static str,
    pub forgot_confirm_label: &'static str,
    pub forgot_confirm_placeholder: &'static str,
    pub forgot_reset_submit: &'static str,
    pub forgot_resetting: &'static str,
    pub forgot_success_heading: &'static str,
    pub forgot_success_sub: &'static str,

    // Map tab
    pub map_tab: &'static str,
    pub filters_title: &'static str,
    pub filters_sub: &'static str,
    pub filters_radius_label: &'static str,
    pub filters_interests_label: &'static str,
    pub filters_your_interests_prefix: &'static str,
    pub filters_clear_all: &'static str,
    pub filters_apply: &'static str,
    pub card_feet_away_suffix: &'static str,
    pub card_interests_label: &'static str,
    pub card_send_ping: &'static str,
    pub card_sending_ping: &'static str,
    pub toast_ping_sent: &'static str,
    pub toast_ping_sent_detail_prefix: &'static str,

    // Messages tab
    pub messages_tab: &'static str,
    pub messages_heading: &'static str,
    pub messages_sub: &'static str,
    pub messages_search_placeholder: &'static str,
    pub messages_empty_heading: &'static str,
    pub messages_empty_sub: &'static str,
    pub chat_active_now: &'static str,
    pub chat_offline: &'static str,
    pub chat_input_placeholder: &'static str,
    pub chat_menu_mute: &'static str,
    pub chat_menu_unmute: &'static str,
    pub chat_menu_block: &'static str,
    pub chat_menu_delete: &'static str,
    pub chat_delete_confirm_title: &'static str,
    pub chat_delete_confirm_body: &'static str,
    pub chat_delete_cancel: &'static str,
    pub chat_delete_confirm: &'static str,
    pub toast_blocked: &'static str,
    pub toast_deleted: &'static str,

    // Profile tab
    pub profile_tab: &'static str,
    pub profile_heading: &'static str,
    pub profile_edit: &'static str,
    pub profile_stat_sent: &'static str,
    pub profile_stat_received: &'static str,
    pub profile_stat_friends: &'static str,
    pub profile_interests_label: &'static str,
    pub profile_privacy_title: &'static str,
    pub profile_privacy_sub: &'static str,
    pub profile_notifications_title: &'static str,
    pub profile_notifications_sub: &'static str,
    pub profile_help_title: &'static str,
    pub profile_help_sub: &'static str,
    pub profile_logout_title: &'static str,
    pub profile_logout_sub: &'static str,
    pub edit_dialog_title: &'static str,
    pub edit_dialog_sub: &'static str,
    pub edit_name_label: &'static str,
    pub edit_bio_label: &'static str,
    pub edit_bio_placeholder: &'static str,
    pub edit_interests_label: &'static str,
    pub edit_cancel: &'static str,
    pub edit_save: &'static str,

    // Ping requests
    pub pings_title: &'static str,
    pub pings_sub: &'static str,
    pub pings_empty_heading: &'static str,
    pub pings_empty_sub: &'static str,
    pub pings_ignore: &'static str,
    pub pings_accept: &'static str,
    pub connected_heading: &'static str,
    pub connected_detail_prefix: &'static str,
    pub connected_detail_suffix: &'static str,
}

pub static UI_TEXT: UiText = UiText {
    app_name: "Spark",
    landing_tagline: "Connect with people around",
    landing_get_started: "Get Started",
    landing_login: "Log In",
    feature_nearby: "Nearby",
    feature_match: "Match",
    feature_chat: "Chat",

    login_heading: "Welcome Back",
    login_sub: "Login to discover people nearby",
    login_email_label: "Email or Username",
    login_email_placeholder: "Enter your email",
    login_password_label: "Password",
    login_password_placeholder: "Enter your password",
    login_forgot_link: "Forgot password?",
    login_submit: "Login",
    login_pending: "Logging in...",
    login_no_account: "Don't have an account?",
    login_register_link: "Register",
    login_welcome_prefix: "Welcome back, ",

    wizard_step_prefix: "Step",
    wizard_name_heading: "What's your name?",
    wizard_name_sub: "This is how you'll appear to others",
    wizard_name_placeholder: "Your full name",
    wizard_email_heading: "What's your email?",
    wizard_email_sub: "We'll use this for your account",
    wizard_email_placeholder: "your@email.com",
    wizard_password_heading: "Create a password",
    wizard_password_sub: "Must be at least 6 characters",
    wizard_password_placeholder: "Enter password",
    wizard_confirm_heading: "Confirm your password",
    wizard_confirm_sub: "Enter the same password again",
    wizard_confirm_placeholder: "Confirm password",
    wizard_mismatch_warning: "Passwords do not match",
    wizard_age_heading: "How old are you?",
    wizard_age_sub: "You must be 18 or older",
    wizard_age_placeholder: "Your age",
    wizard_ethnicity_heading: "What's your ethnicity?",
    wizard_ethnicity_sub: "Optional - you can skip this",
    wizard_ethnicity_placeholder: "Select your ethnicity",
    wizard_bio_heading: "Tell us about yourself",
    wizard_bio_sub: "Optional - share a little bio",
    wizard_bio_placeholder: "Tell others about yourself...",
    wizard_interests_heading: "What are you into?",
    wizard_interests_sub: "Tap a category to see sub-interests, then tap to select.",
    wizard_interests_back: "← Back",
    wizard_continue: "Continue",
    wizard_complete: "Complete Registration",
    wizard_welcome_toast: "Welcome to Spark!",

    forgot_email_heading: "Forgot Password?",
    forgot_email_sub: "Enter your email to receive a verification code",
    forgot_send_code: "Send Code",
    forgot_sending: "Sending...",
    forgot_otp_heading: "Verify Code",
    forgot_otp_sub_prefix: "Enter the 6-digit code sent to ",
    forgot_otp_label: "Verification Code",
    forgot_resend: "Didn't receive code? Resend",
    forgot_verify: "Verify Code",
    forgot_verifying: "Verifying...",
    forgot_reset_heading: "Reset Password",
    forgot_reset_sub: "Create a new password for your account",
    forgot_new_password_label: "New Password",
    forgot_new_password_placeholder: "Enter new password",
    forgot_confirm_label: "Confirm Password",
    forgot_confirm_placeholder: "Confirm new password",
    forgot_reset_submit: "Reset Password",
    forgot_resetting: "Resetting...",
    forgot_success_heading: "Password Reset!",
    forgot_success_sub: "Your password has been successfully reset",

    map_tab: "Map",
    filters_title: "Filters",
    filters_sub: "Customize who you see on the map",
    filters_radius_label: "Search Radius",
    filters_interests_label: "Filter by Shared Interests",
    filters_your_interests_prefix: "Your interests: ",
    filters_clear_all: "Clear all",
    filters_apply: "Apply Filters",
    card_feet_away_suffix: " feet away",
    card_interests_label: "Interests",
    card_send_ping: "Send Ping",
    card_sending_ping: "Sending...",
    toast_ping_sent: "Ping sent!",
    toast_ping_sent_detail_prefix: "Your connection request was sent to ",

    messages_tab: "Messages",
    messages_heading: "Messages",
    messages_sub: "Chat with your connections",
    messages_search_placeholder: "Search conversations...",
    messages_empty_heading: "No conversations yet",
    messages_empty_sub: "Start connecting with people nearby to begin chatting",
    chat_active_now: "Active now",
    chat_offline: "Offline",
    chat_input_placeholder: "Type a message...",
    chat_menu_mute: "Mute",
    chat_menu_unmute: "Unmute",
    chat_menu_block: "Block User",
    chat_menu_delete: "Delete Conversation",
    chat_delete_confirm_title: "Delete this conversation?",
    chat_delete_confirm_body: "This removes the thread from your inbox. It cannot be undone.",
    chat_delete_cancel: "Cancel",
    chat_delete_confirm: "Delete",
    toast_blocked: "User blocked",
    toast_deleted: "Conversation deleted",

    profile_tab: "Profile",
    profile_heading: "Profile",
    profile_edit: "Edit",
    profile_stat_sent: "Sent",
    profile_stat_received: "Received",
    profile_stat_friends: "Friends",
    profile_interests_label: "Interests",
    profile_privacy_title: "Privacy Settings",
    profile_privacy_sub: "Manage who can see you",
    profile_notifications_title: "Notification Preferences",
    profile_notifications_sub: "Control ping alerts",
    profile_help_title: "Help & Support",
    profile_help_sub: "Get assistance",
    profile_logout_title: "Log Out",
    profile_logout_sub: "Sign out of your account",
    edit_dialog_title: "Edit Profile",
    edit_dialog_sub: "Update your profile information and interests",
    edit_name_label: "Name",
    edit_bio_label: "Bio",
    edit_bio_placeholder: "Tell people about yourself...",
    edit_interests_label: "Interests",
    edit_cancel: "Cancel",
    edit_save: "Save Changes",

    pings_title: "Incoming Pings",
    pings_sub: "Review and respond to connection requests from nearby people",
    pings_empty_heading: "No pending requests",
    pings_empty_sub: "When someone pings you, they'll appear here",
    pings_ignore: "Ignore",
    pings_accept: "Accept",
    connected_heading: "You're now connected!",
    connected_detail_prefix: "You and ",
    connected_detail_suffix: " can now chat",
};
