use super::locale::Lang;

/// Static label table for one display language. Lookup is total; every
/// language carries every label.
pub struct Translations {
  pub brand: &'static str,
  pub nav_services: &'static str,
  pub nav_masterclass: &'static str,
  pub nav_login: &'static str,
  pub nav_register: &'static str,
  pub nav_logout: &'static str,
  pub nav_user_prefix: &'static str,

  pub home_title: &'static str,
  pub home_subtitle: &'static str,
  pub home_start: &'static str,
  pub reassurance_title: &'static str,
  pub reassurance_secure_title: &'static str,
  pub reassurance_secure_desc: &'static str,
  pub reassurance_fast_title: &'static str,
  pub reassurance_fast_desc: &'static str,
  pub reassurance_payment_title: &'static str,
  pub reassurance_payment_desc: &'static str,
  pub plans_title: &'static str,
  pub plan_buy: &'static str,

  pub pay_title: &'static str,
  pub pay_method: &'static str,
  pub pay_platform_account: &'static str,
  pub pay_confirm: &'static str,
  pub pay_cancel: &'static str,
  pub pay_processing: &'static str,
  pub pay_success: &'static str,
  pub pay_login_required: &'static str,

  pub login_title: &'static str,
  pub login_subtitle: &'static str,
  pub login_email: &'static str,
  pub login_password: &'static str,
  pub login_submit: &'static str,
  pub login_loading: &'static str,
  pub login_error: &'static str,
  pub login_no_account: &'static str,

  pub register_title: &'static str,
  pub register_subtitle: &'static str,
  pub register_name: &'static str,
  pub register_email: &'static str,
  pub register_password: &'static str,
  pub register_submit: &'static str,
  pub register_loading: &'static str,
  pub register_missing: &'static str,
  pub register_email_taken: &'static str,
  pub register_failed: &'static str,
  pub register_have_account: &'static str,

  pub dash_balance: &'static str,
  pub dash_daily_loss: &'static str,
  pub dash_profit_target: &'static str,
  pub dash_iam: &'static str,
  pub dash_action_panel: &'static str,
  pub dash_amount: &'static str,
  pub dash_buy: &'static str,
  pub dash_sell: &'static str,
  pub dash_ai_title: &'static str,
  pub dash_ai_text: &'static str,
  pub dash_trade_error: &'static str,
  pub dash_backend_error: &'static str,

  pub admin_title: &'static str,
  pub admin_loading: &'static str,
  pub admin_empty: &'static str,
  pub admin_unavailable: &'static str,
  pub admin_th_id: &'static str,
  pub admin_th_name: &'static str,
  pub admin_th_email: &'static str,
  pub admin_th_role: &'static str,
  pub admin_th_status: &'static str,
  pub admin_paypal_button: &'static str,
  pub admin_paypal_title: &'static str,
  pub admin_paypal_hint: &'static str,
  pub admin_client_id: &'static str,
  pub admin_secret: &'static str,
  pub admin_save: &'static str,
  pub admin_cancel: &'static str,
  pub admin_saved: &'static str,

  pub superadmin_title: &'static str,
  pub superadmin_email_label: &'static str,
  pub superadmin_save: &'static str,
  pub superadmin_saving: &'static str,
  pub superadmin_saved: &'static str,
  pub superadmin_error: &'static str,

  pub back_to_dashboard: &'static str,

  pub chat_title: &'static str,
  pub chat_placeholder: &'static str,
  pub chat_greeting: &'static str,
  pub chat_fallback: &'static str,
}

static FR: Translations = Translations {
  brand: "TradeSense AI",
  nav_services: "Services",
  nav_masterclass: "MasterClass",
  nav_login: "Connexion",
  nav_register: "Inscription",
  nav_logout: "Déconnexion",
  nav_user_prefix: "Utilisateur #",

  home_title: "Prouvez votre talent de trader",
  home_subtitle: "Achetez un challenge, respectez les règles de risque et décrochez un compte financé.",
  home_start: "Commencer le challenge",
  reassurance_title: "Pourquoi TradeSense ?",
  reassurance_secure_title: "Paiement sécurisé",
  reassurance_secure_desc: "Transactions chiffrées et vérifiées de bout en bout.",
  reassurance_fast_title: "Activation instantanée",
  reassurance_fast_desc: "Votre challenge démarre dès la confirmation du paiement.",
  reassurance_payment_title: "Moyens de paiement locaux",
  reassurance_payment_desc: "CMI, virement ou PayPal, au choix.",
  plans_title: "Nos challenges",
  plan_buy: "Acheter",

  pay_title: "Paiement du challenge",
  pay_method: "Moyen de paiement",
  pay_platform_account: "Compte PayPal de la plateforme",
  pay_confirm: "Confirmer le paiement",
  pay_cancel: "Annuler",
  pay_processing: "Traitement du paiement…",
  pay_success: "Paiement réussi. Challenge activé.",
  pay_login_required: "Veuillez vous connecter pour acheter un challenge",

  login_title: "Connexion",
  login_subtitle: "Entrez vos identifiants pour continuer",
  login_email: "Email",
  login_password: "Mot de passe",
  login_submit: "Se connecter",
  login_loading: "Vérification…",
  login_error: "Email ou mot de passe incorrect",
  login_no_account: "Pas encore de compte ? Inscrivez-vous",

  register_title: "Inscription",
  register_subtitle: "Créez votre compte pour commencer le challenge",
  register_name: "Nom",
  register_email: "Email",
  register_password: "Mot de passe",
  register_submit: "Créer le compte",
  register_loading: "Création…",
  register_missing: "Veuillez remplir tous les champs",
  register_email_taken: "Email déjà utilisé",
  register_failed: "Inscription impossible",
  register_have_account: "Déjà un compte ? Connectez-vous",

  dash_balance: "Capital du challenge",
  dash_daily_loss: "Perte journalière max",
  dash_profit_target: "Objectif de profit",
  dash_iam: "Action IAM (Maroc Telecom)",
  dash_action_panel: "Passer un ordre",
  dash_amount: "Quantité BTC",
  dash_buy: "Acheter",
  dash_sell: "Vendre",
  dash_ai_title: "Analyse TradeSense AI",
  dash_ai_text: "Notre assistant analyse les graphiques en continu pour détecter les configurations à fort potentiel.",
  dash_trade_error: "Erreur trade",
  dash_backend_error: "Impossible de contacter le backend",

  admin_title: "Admin Panel",
  admin_loading: "Chargement...",
  admin_empty: "Aucun utilisateur",
  admin_unavailable: "Liste des utilisateurs indisponible. Réessayez plus tard.",
  admin_th_id: "ID",
  admin_th_name: "Nom",
  admin_th_email: "Email",
  admin_th_role: "Rôle",
  admin_th_status: "Statut",
  admin_paypal_button: "Configuration PayPal",
  admin_paypal_title: "Configuration PayPal (Simulation)",
  admin_paypal_hint: "Saisissez vos clés API. Aucun envoi au backend pour l'instant.",
  admin_client_id: "Client ID",
  admin_secret: "Secret",
  admin_save: "Enregistrer",
  admin_cancel: "Annuler",
  admin_saved: "Clés PayPal enregistrées (simulé)",

  superadmin_title: "Configuration SuperAdmin",
  superadmin_email_label: "Email PayPal de la plateforme",
  superadmin_save: "Enregistrer",
  superadmin_saving: "Enregistrement…",
  superadmin_saved: "Adresse PayPal enregistrée",
  superadmin_error: "Erreur lors de l'enregistrement",

  back_to_dashboard: "Retour au dashboard",

  chat_title: "Assistance IA",
  chat_placeholder: "Écrivez votre message…",
  chat_greeting: "Bonjour, comment puis-je vous aider ?",
  chat_fallback: "Je suis TradeSense AI, j'analyse actuellement les graphiques pour vous...",
};

static EN: Translations = Translations {
  brand: "TradeSense AI",
  nav_services: "Services",
  nav_masterclass: "MasterClass",
  nav_login: "Log in",
  nav_register: "Sign up",
  nav_logout: "Log out",
  nav_user_prefix: "User #",

  home_title: "Prove your trading talent",
  home_subtitle: "Buy a challenge, respect the risk rules and earn a funded account.",
  home_start: "Start the challenge",
  reassurance_title: "Why TradeSense?",
  reassurance_secure_title: "Secure payment",
  reassurance_secure_desc: "Transactions encrypted and verified end to end.",
  reassurance_fast_title: "Instant activation",
  reassurance_fast_desc: "Your challenge starts as soon as the payment is confirmed.",
  reassurance_payment_title: "Local payment methods",
  reassurance_payment_desc: "CMI, bank transfer or PayPal, your choice.",
  plans_title: "Our challenges",
  plan_buy: "Buy",

  pay_title: "Challenge payment",
  pay_method: "Payment method",
  pay_platform_account: "Platform PayPal account",
  pay_confirm: "Confirm payment",
  pay_cancel: "Cancel",
  pay_processing: "Processing payment…",
  pay_success: "Payment successful. Challenge activated.",
  pay_login_required: "Please sign in to buy a challenge",

  login_title: "Log in",
  login_subtitle: "Enter your credentials to continue",
  login_email: "Email",
  login_password: "Password",
  login_submit: "Log in",
  login_loading: "Checking…",
  login_error: "Incorrect email or password",
  login_no_account: "No account yet? Sign up",

  register_title: "Sign up",
  register_subtitle: "Create your account to start the challenge",
  register_name: "Name",
  register_email: "Email",
  register_password: "Password",
  register_submit: "Create account",
  register_loading: "Creating…",
  register_missing: "Please fill in all fields",
  register_email_taken: "Email already in use",
  register_failed: "Registration failed",
  register_have_account: "Already have an account? Log in",

  dash_balance: "Challenge equity",
  dash_daily_loss: "Max daily loss",
  dash_profit_target: "Profit target",
  dash_iam: "IAM share (Maroc Telecom)",
  dash_action_panel: "Place an order",
  dash_amount: "BTC quantity",
  dash_buy: "Buy",
  dash_sell: "Sell",
  dash_ai_title: "TradeSense AI analysis",
  dash_ai_text: "Our assistant scans the charts continuously for high-potential setups.",
  dash_trade_error: "Trade error",
  dash_backend_error: "Unable to reach the backend",

  admin_title: "Admin Panel",
  admin_loading: "Loading...",
  admin_empty: "No users",
  admin_unavailable: "User list unavailable. Try again later.",
  admin_th_id: "ID",
  admin_th_name: "Name",
  admin_th_email: "Email",
  admin_th_role: "Role",
  admin_th_status: "Status",
  admin_paypal_button: "PayPal settings",
  admin_paypal_title: "PayPal settings (simulation)",
  admin_paypal_hint: "Enter your API keys. Nothing is sent to the backend yet.",
  admin_client_id: "Client ID",
  admin_secret: "Secret",
  admin_save: "Save",
  admin_cancel: "Cancel",
  admin_saved: "PayPal keys saved (simulated)",

  superadmin_title: "SuperAdmin settings",
  superadmin_email_label: "Platform PayPal email",
  superadmin_save: "Save",
  superadmin_saving: "Saving…",
  superadmin_saved: "PayPal address saved",
  superadmin_error: "Error while saving",

  back_to_dashboard: "Back to dashboard",

  chat_title: "AI assistance",
  chat_placeholder: "Type your message…",
  chat_greeting: "Hello, how can I help you?",
  chat_fallback: "I am TradeSense AI, currently analyzing the charts for you...",
};

static AR: Translations = Translations {
  brand: "TradeSense AI",
  nav_services: "الخدمات",
  nav_masterclass: "ماستر كلاس",
  nav_login: "تسجيل الدخول",
  nav_register: "إنشاء حساب",
  nav_logout: "تسجيل الخروج",
  nav_user_prefix: "مستخدم #",

  home_title: "أثبت موهبتك في التداول",
  home_subtitle: "اشترِ تحدياً، التزم بقواعد المخاطرة واحصل على حساب ممول.",
  home_start: "ابدأ التحدي",
  reassurance_title: "لماذا TradeSense؟",
  reassurance_secure_title: "دفع آمن",
  reassurance_secure_desc: "معاملات مشفرة ومُتحقق منها من البداية إلى النهاية.",
  reassurance_fast_title: "تفعيل فوري",
  reassurance_fast_desc: "يبدأ التحدي فور تأكيد الدفع.",
  reassurance_payment_title: "وسائل دفع محلية",
  reassurance_payment_desc: "CMI أو تحويل بنكي أو PayPal، حسب اختيارك.",
  plans_title: "تحدياتنا",
  plan_buy: "شراء",

  pay_title: "دفع التحدي",
  pay_method: "وسيلة الدفع",
  pay_platform_account: "حساب PayPal الخاص بالمنصة",
  pay_confirm: "تأكيد الدفع",
  pay_cancel: "إلغاء",
  pay_processing: "جارٍ معالجة الدفع…",
  pay_success: "تم الدفع بنجاح. تم تفعيل التحدي.",
  pay_login_required: "الرجاء تسجيل الدخول لشراء التحدي",

  login_title: "تسجيل الدخول",
  login_subtitle: "أدخل بياناتك للمتابعة",
  login_email: "البريد الإلكتروني",
  login_password: "كلمة المرور",
  login_submit: "دخول",
  login_loading: "جارٍ التحقق…",
  login_error: "البريد الإلكتروني أو كلمة المرور غير صحيحة",
  login_no_account: "لا تملك حساباً؟ سجّل الآن",

  register_title: "إنشاء حساب",
  register_subtitle: "أنشئ حسابك لبدء التحدي",
  register_name: "الاسم",
  register_email: "البريد الإلكتروني",
  register_password: "كلمة المرور",
  register_submit: "إنشاء الحساب",
  register_loading: "جارٍ الإنشاء…",
  register_missing: "الرجاء ملء جميع الحقول",
  register_email_taken: "البريد الإلكتروني مستخدم بالفعل",
  register_failed: "تعذر إنشاء الحساب",
  register_have_account: "لديك حساب؟ سجّل الدخول",

  dash_balance: "رأس مال التحدي",
  dash_daily_loss: "أقصى خسارة يومية",
  dash_profit_target: "هدف الربح",
  dash_iam: "سهم IAM (اتصالات المغرب)",
  dash_action_panel: "تنفيذ أمر",
  dash_amount: "كمية BTC",
  dash_buy: "شراء",
  dash_sell: "بيع",
  dash_ai_title: "تحليل TradeSense AI",
  dash_ai_text: "يحلل مساعدنا الرسوم البيانية باستمرار لاكتشاف الفرص الواعدة.",
  dash_trade_error: "خطأ في الصفقة",
  dash_backend_error: "تعذر الاتصال بالخادم",

  admin_title: "لوحة الإدارة",
  admin_loading: "جارٍ التحميل...",
  admin_empty: "لا يوجد مستخدمون",
  admin_unavailable: "قائمة المستخدمين غير متاحة. حاول لاحقاً.",
  admin_th_id: "المعرف",
  admin_th_name: "الاسم",
  admin_th_email: "البريد",
  admin_th_role: "الدور",
  admin_th_status: "الحالة",
  admin_paypal_button: "إعدادات PayPal",
  admin_paypal_title: "إعدادات PayPal (محاكاة)",
  admin_paypal_hint: "أدخل مفاتيح API. لا يُرسل شيء إلى الخادم حالياً.",
  admin_client_id: "Client ID",
  admin_secret: "Secret",
  admin_save: "حفظ",
  admin_cancel: "إلغاء",
  admin_saved: "تم حفظ مفاتيح PayPal (محاكاة)",

  superadmin_title: "إعدادات المشرف العام",
  superadmin_email_label: "بريد PayPal الخاص بالمنصة",
  superadmin_save: "حفظ",
  superadmin_saving: "جارٍ الحفظ…",
  superadmin_saved: "تم حفظ عنوان PayPal",
  superadmin_error: "حدث خطأ أثناء الحفظ",

  back_to_dashboard: "العودة إلى لوحة التداول",

  chat_title: "المساعدة الذكية",
  chat_placeholder: "اكتب رسالتك…",
  chat_greeting: "مرحباً، كيف يمكنني مساعدتك؟",
  chat_fallback: "أنا TradeSense AI، أحلل الرسوم البيانية من أجلك الآن...",
};

pub fn t(lang: Lang) -> &'static Translations {
  match lang {
    Lang::Fr => &FR,
    Lang::En => &EN,
    Lang::Ar => &AR,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn every_language_resolves_to_a_table() {
    assert_eq!(t(Lang::Fr).login_error, "Email ou mot de passe incorrect");
    assert_eq!(t(Lang::En).nav_logout, "Log out");
    assert_eq!(t(Lang::Ar).nav_login, "تسجيل الدخول");
  }
}
