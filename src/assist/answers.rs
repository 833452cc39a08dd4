//! Canned answer bodies for the assist classifier.

pub(super) const PASSWORD_ANSWER: &str = r#"To reset your password, please follow these steps:

1. Go to the login page and click "Forgot Password"
2. Enter your registered email address
3. Check your inbox (and spam folder) for the reset link
4. Click the link and create a new password

If you don't receive the email within 5 minutes, please check that you're using the correct email address associated with your account. You can also try requesting the reset again.

For security reasons, the reset link expires after 24 hours."#;

pub(super) const MEETING_ANSWER: &str = r#"The "Unable to create meeting" error can occur due to several reasons. Here are the troubleshooting steps:

1. **Check your internet connection** - Ensure you have a stable connection
2. **Verify your account status** - Make sure your subscription is active
3. **Clear browser cache** - Try clearing your browser cache and cookies
4. **Check time zone settings** - Ensure your time zone is correctly set
5. **Try a different browser** - Sometimes browser extensions can cause conflicts

If the issue persists after trying these steps, please try logging out and back in. This usually resolves most scheduling issues."#;

pub(super) const TRANSCRIPTION_ANSWER: &str = r#"To enable automatic transcription for meeting recordings:

1. Go to **Settings** > **Recording**
2. Toggle on "Audio Transcript"
3. Select your preferred language for transcription
4. Save your changes

**Note:** Automatic transcription is available on Pro, Business, and Enterprise plans. If you're on the Basic plan, you'll need to upgrade to access this feature.

Once enabled, all new recordings will automatically include transcriptions that can be searched, edited, and exported."#;

pub(super) const BILLING_ANSWER: &str = r#"I understand you're concerned about the duplicate charge. Here's how we can help:

1. **Verify the charges** - Please check your billing history in Account > Billing to confirm the duplicate
2. **Common causes** - This can happen if the payment page was refreshed during processing
3. **Refund process** - Duplicate charges are automatically detected and refunded within 5-7 business days

If you don't see a pending refund in your billing history, please reply with your invoice numbers and we'll expedite the refund process.

For future reference, if a payment seems stuck, please wait a few minutes before retrying."#;

pub(super) const INTEGRATION_ANSWER: &str = r#"Let's troubleshoot your Slack integration. Here are the steps:

1. **Verify permissions** - Ensure the integration has the necessary permissions in Slack
2. **Re-authorize** - Go to Settings > Integrations > Slack and click "Re-authorize"
3. **Check notification settings** - Make sure notifications are enabled both in our app and in Slack
4. **Test the connection** - Use the "Test Connection" button in integration settings

**Common issues:**
- Slack workspace admin may need to approve the app
- Notifications might be going to a different channel
- Browser notifications might be blocking alerts"#;

pub(super) const DEFAULT_ANSWER: &str = r#"Thank you for your question. Based on our documentation, here's what I found:

I'd be happy to help you with your inquiry. To provide the most accurate assistance, could you please provide more details about:

1. What specific feature or functionality you're trying to use
2. Any error messages you've encountered
3. What troubleshooting steps you've already tried

In the meantime, you might find our Getting Started Guide helpful for general questions about using the platform."#;
