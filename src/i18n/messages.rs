// src/i18n/messages.rs
//! Static translation tables for the site copy.
//!
//! Keys use dotted namespaces (`nav.catalog`, `quote.submit`). Arabic falls
//! back to English for a missing key; a key missing everywhere yields `""`.

use crate::models::locale::Locale;

pub fn t(locale: Locale, key: &str) -> &'static str {
    if let Some(value) = lookup(table_for(locale), key) {
        return value;
    }
    if locale != Locale::En {
        if let Some(value) = lookup(EN, key) {
            return value;
        }
    }
    ""
}

fn table_for(locale: Locale) -> &'static [(&'static str, &'static str)] {
    match locale {
        Locale::En => EN,
        Locale::Ar => AR,
    }
}

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

const EN: &[(&str, &str)] = &[
    // site
    ("site.name", "ChemDist Global"),
    ("site.tagline", "Premium Chemical Distribution & Supply Chain Solutions"),
    ("meta.title", "ChemDist Global | Premium Chemical Distribution & Supply Chain Solutions"),
    ("meta.description", "Leading global chemical distributor specializing in hot melt adhesives, saturated resins, and industrial pigments. ISO 9001:2015 certified with temperature-controlled logistics and 99.8% on-time delivery."),
    ("meta.keywords", "chemical distribution, hot melt adhesives, saturated resins, industrial pigments, adhesive supplier, chemical logistics, bulk chemicals, ISO 9001 certified, REACH compliance, industrial chemicals"),
    // navigation
    ("nav.home", "Home"),
    ("nav.catalog", "Catalog"),
    ("nav.company", "Company"),
    ("nav.careers", "Careers"),
    ("nav.contact", "Contact"),
    ("nav.quote", "Request a Quote"),
    ("nav.shipping", "Shipping"),
    ("nav.terms", "Terms of Service"),
    ("nav.privacy", "Privacy Policy"),
    ("nav.language", "Language"),
    ("nav.theme_dark", "Dark mode"),
    ("nav.theme_light", "Light mode"),
    // footer
    ("footer.about", "Reliable supply of adhesives, resins and pigments to manufacturers across the Middle East, Europe and beyond."),
    ("footer.products", "Products"),
    ("footer.company", "Company"),
    ("footer.legal", "Legal"),
    ("footer.rights", "All rights reserved."),
    // categories
    ("category.all", "All Products"),
    ("category.hot_melt", "Hot Melt Adhesives"),
    ("category.resins", "Saturated Resins"),
    ("category.pigments", "Industrial Pigments"),
    // home
    ("home.hero_title", "Chemical supply you can build a production line on"),
    ("home.hero_subtitle", "Hot melt adhesives, saturated resins and industrial pigments, delivered on time from certified hubs."),
    ("home.cta_catalog", "Browse the catalog"),
    ("home.cta_quote", "Request a quote"),
    ("home.categories_title", "Our product lines"),
    ("home.why_title", "Why ChemDist Global"),
    ("home.why_quality", "ISO 9001:2015 certified quality management and full REACH documentation."),
    ("home.why_logistics", "Temperature-controlled logistics for sensitive grades."),
    ("home.why_delivery", "99.8% on-time delivery across our distribution network."),
    // catalog
    ("catalog.title", "Product Catalog"),
    ("catalog.meta_title", "Product Catalog - Chemical Distribution"),
    ("catalog.meta_description", "Browse our extensive catalog of hot melt adhesives, saturated resins, and industrial pigments. Filter by category, application, and CAS number. In-stock products with fast delivery."),
    ("catalog.heading", "Industrial Chemicals Catalog"),
    ("catalog.category", "Category"),
    ("catalog.search", "Search"),
    ("catalog.search_placeholder", "Product name or keyword"),
    ("catalog.cas", "CAS Number"),
    ("catalog.cas_placeholder", "e.g. 9003-07-0"),
    ("catalog.application", "Application"),
    ("catalog.apply", "Apply filters"),
    ("catalog.clear", "Clear all"),
    ("catalog.results", "products"),
    ("catalog.empty", "No products match your filters."),
    ("catalog.previous", "Previous"),
    ("catalog.next", "Next"),
    ("catalog.view_details", "View details"),
    ("catalog.request_quote", "Request quote"),
    // product
    ("product.not_found", "Product not found"),
    ("product.back", "Back to catalog"),
    ("product.overview", "Overview"),
    ("product.specifications", "Specifications"),
    ("product.no_specifications", "Specifications are available on request."),
    ("product.category", "Category"),
    ("product.cas", "CAS Number"),
    ("product.application", "Application"),
    ("product.packaging", "Packaging"),
    ("product.stock", "Availability"),
    ("product.documents", "Documents"),
    ("product.sds", "Safety Data Sheet (SDS)"),
    ("product.coa", "Certificate of Analysis (CoA)"),
    ("product.documents_note", "Sent with your quotation on request."),
    ("product.request_quote", "Request a quote for this product"),
    // shared form fields
    ("form.full_name", "Full name"),
    ("form.email", "Business email"),
    ("form.company", "Company"),
    ("form.phone", "Phone"),
    ("form.required", "Required"),
    ("form.invalid", "Please enter your name and a valid email address."),
    ("form.unavailable", "Our message service is temporarily unavailable. Please email us directly."),
    // quote
    ("quote.title", "Request a Quote"),
    ("quote.meta_title", "Request a Quote - Bulk Chemical Pricing"),
    ("quote.meta_description", "Request a custom quote for bulk chemicals, adhesives, resins, and pigments. 24-hour response time with competitive pricing and volume discounts."),
    ("quote.subtitle", "Response within 24 hours"),
    ("quote.description", "Tell us what you need and where it is going. Our sales engineers will come back with pricing, lead time and documentation."),
    ("quote.contact_title", "Contact person"),
    ("quote.product_title", "Product details"),
    ("quote.product", "Product name"),
    ("quote.category", "Product category"),
    ("quote.select_category", "Select a category"),
    ("quote.cas", "CAS number"),
    ("quote.application", "Application"),
    ("quote.quantity", "Quantity"),
    ("quote.quantity_unit", "Unit"),
    ("quote.packaging", "Preferred packaging"),
    ("quote.frequency", "Order frequency"),
    ("quote.frequency_once", "One-time"),
    ("quote.frequency_monthly", "Monthly"),
    ("quote.frequency_quarterly", "Quarterly"),
    ("quote.delivery_title", "Delivery"),
    ("quote.delivery_date", "Required delivery date"),
    ("quote.country", "Country"),
    ("quote.city", "City"),
    ("quote.address", "Delivery address"),
    ("quote.notes", "Additional notes"),
    ("quote.docs", "Required documents"),
    ("quote.doc_tds", "Technical Data Sheet (TDS)"),
    ("quote.submit", "Submit request"),
    ("quote.success", "Thank you. Your quote request has been sent and our team will reply within 24 hours."),
    ("quote.error", "We could not send your request. Please try again or email sales@chemdist-global.com."),
    // contact
    ("contact.title", "Contact Us"),
    ("contact.meta_title", "Contact Us - Chemical Sales & Technical Support"),
    ("contact.meta_description", "Contact ChemDist Global for technical support, sales enquiries and logistics questions on adhesives, resins and pigments."),
    ("contact.subtitle", "Talk to our technical and sales team."),
    ("contact.inquiry", "Inquiry type"),
    ("contact.inquiry_technical", "Technical support"),
    ("contact.inquiry_sales", "Sales"),
    ("contact.inquiry_logistics", "Logistics"),
    ("contact.inquiry_other", "Other"),
    ("contact.message", "Message"),
    ("contact.submit", "Send message"),
    ("contact.success", "Message sent successfully!"),
    ("contact.error", "Failed to send message. Please try again."),
    ("contact.sales_desk", "Sales desk"),
    ("contact.hours", "Sunday to Thursday, 8:00 to 17:00"),
    // company
    ("company.title", "Our Company"),
    ("company.meta_title", "About ChemDist Global - Chemical Distribution Company"),
    ("company.meta_description", "Learn about ChemDist Global: our mission, our distribution network and the standards behind every delivery of adhesives, resins and pigments."),
    ("company.intro", "ChemDist Global connects leading chemical producers with manufacturers who need dependable supply, technical support and compliant documentation."),
    ("company.s1.title", "Our mission"),
    ("company.s1.body", "To keep our customers' production lines running with the right material, at the right specification, on the agreed date."),
    ("company.s2.title", "Industries we serve"),
    ("company.s2.body", "Packaging, coatings, plastics and general industrial manufacturing rely on our adhesives, resins and pigments every day."),
    ("company.s3.title", "Logistics network"),
    ("company.s3.body", "Regional hubs with temperature-controlled storage shorten lead times and protect sensitive grades in transit."),
    ("company.s4.title", "Quality and compliance"),
    ("company.s4.body", "We operate an ISO 9001:2015 quality system and supply SDS and CoA documents with every consignment."),
    // careers
    ("careers.title", "Careers"),
    ("careers.meta_title", "Chemical Distribution Careers | Jobs in Chemical Industry"),
    ("careers.meta_description", "Join ChemDist Global's chemical distribution team. Explore careers in chemical logistics, sales, operations, and technical services."),
    ("careers.intro", "Build your career with a team that moves the materials modern manufacturing depends on."),
    ("careers.s1.title", "Our culture"),
    ("careers.s1.body", "Safety first, collaboration across hubs, and room to grow through training and mentoring."),
    ("careers.s2.title", "Benefits"),
    ("careers.s2.body", "Competitive salary, health cover, paid time off and a structured development plan for every role."),
    ("careers.s3.title", "Open positions"),
    ("careers.s3.body", "There are no open positions right now. Send your CV to careers@chemdist-global.com and we will contact you when a matching role opens."),
    // shipping
    ("shipping.title", "Shipping & Delivery"),
    ("shipping.meta_title", "Shipping & Delivery - Hazmat Chemical Logistics"),
    ("shipping.meta_description", "How ChemDist Global ships adhesives, resins and pigments: hazmat compliance, temperature control, packaging and tracking."),
    ("shipping.intro", "Every shipment is planned around the product's handling requirements and your receiving schedule."),
    ("shipping.s1.title", "Hazardous materials"),
    ("shipping.s1.body", "All shipments comply with DOT, IATA, IMDG and local hazmat regulations. Hazardous materials travel in UN-certified packaging."),
    ("shipping.s2.title", "Temperature control"),
    ("shipping.s2.body", "Temperature-sensitive chemicals ship in controlled containers with logged conditions throughout the route."),
    ("shipping.s3.title", "Packaging options"),
    ("shipping.s3.body", "Bags, drums, IBCs and bulk deliveries depending on the product and order volume."),
    ("shipping.s4.title", "Damage and claims"),
    ("shipping.s4.body", "Report damage within 48 hours to claims@chemdist-global.com. We work with carriers to resolve every claim."),
    // terms
    ("terms.title", "Terms of Service"),
    ("terms.meta_title", "Terms of Service"),
    ("terms.meta_description", "Terms governing the use of the ChemDist Global website and the sale of chemical products."),
    ("terms.intro", "By accessing or using our services you agree to be bound by these Terms of Service."),
    ("terms.s1.title", "1. Chemical product sales"),
    ("terms.s1.body", "Purchases are restricted to qualified business entities with proper licensing and a legitimate use. We may verify credentials and refuse orders."),
    ("terms.s2.title", "2. Product information"),
    ("terms.s2.body", "Specifications, availability and pricing are subject to change. Safety Data Sheets are provided for reference and are not warranties beyond stated specifications."),
    ("terms.s3.title", "3. Pricing and payment"),
    ("terms.s3.body", "Quotations are valid for the period stated on them. Minimum order quantities may apply; bulk pricing is available for qualifying volumes."),
    ("terms.s4.title", "4. Shipping and delivery"),
    ("terms.s4.body", "The customer is responsible for ensuring receiving facilities are authorized and equipped for hazardous materials, and for import duties and taxes."),
    ("terms.s5.title", "5. Returns"),
    ("terms.s5.body", "Returns are accepted only for manufacturing defects or shipping errors and require a return authorization first."),
    ("terms.s6.title", "6. Liability"),
    ("terms.s6.body", "Products are warranted to meet stated specifications at the time of delivery. We are not liable for consequential or indirect damages."),
    // privacy
    ("privacy.title", "Privacy Policy"),
    ("privacy.meta_title", "Privacy Policy"),
    ("privacy.meta_description", "How ChemDist Global collects, uses and protects the information you share through our website."),
    ("privacy.intro", "We collect only the information needed to answer your enquiries and prepare quotations."),
    ("privacy.s1.title", "Information we collect"),
    ("privacy.s1.body", "Contact details and order requirements you submit through the quote and contact forms."),
    ("privacy.s2.title", "How we use it"),
    ("privacy.s2.body", "To reply to your request, prepare quotations and meet our regulatory record-keeping obligations."),
    ("privacy.s3.title", "Sharing"),
    ("privacy.s3.body", "Form submissions are delivered through an email service provider. We do not sell personal data."),
    ("privacy.s4.title", "Retention"),
    ("privacy.s4.body", "Enquiries are kept for as long as needed to serve you and as required by law."),
    ("privacy.s5.title", "Your rights"),
    ("privacy.s5.body", "You may ask for a copy, correction or deletion of your data by writing to privacy@chemdist-global.com."),
    // errors
    ("notfound.title", "Page not found"),
    ("notfound.body", "The page you are looking for does not exist."),
];

const AR: &[(&str, &str)] = &[
    // site
    ("site.name", "كيم ديست جلوبال"),
    ("site.tagline", "توزيع كيماويات متميز وحلول سلاسل الإمداد"),
    ("meta.title", "كيم ديست جلوبال | توزيع كيماويات متميز وحلول سلاسل الإمداد"),
    ("meta.description", "موزع كيماويات عالمي رائد متخصص في اللواصق الحرارية والراتنجات المشبعة والأصباغ الصناعية. حاصل على شهادة ISO 9001:2015 مع خدمات لوجستية مضبوطة الحرارة ونسبة تسليم في الموعد 99.8٪."),
    ("meta.keywords", "توزيع الكيماويات, اللواصق الحرارية, الراتنجات المشبعة, الأصباغ الصناعية, مورد لواصق, لوجستيات الكيماويات, كيماويات بالجملة, ISO 9001, الامتثال لريتش, كيماويات صناعية"),
    // navigation
    ("nav.home", "الرئيسية"),
    ("nav.catalog", "الكتالوج"),
    ("nav.company", "الشركة"),
    ("nav.careers", "الوظائف"),
    ("nav.contact", "اتصل بنا"),
    ("nav.quote", "طلب عرض سعر"),
    ("nav.shipping", "الشحن"),
    ("nav.terms", "شروط الخدمة"),
    ("nav.privacy", "سياسة الخصوصية"),
    ("nav.language", "اللغة"),
    ("nav.theme_dark", "الوضع الداكن"),
    ("nav.theme_light", "الوضع الفاتح"),
    // footer
    ("footer.about", "توريد موثوق للواصق والراتنجات والأصباغ للمصنعين في الشرق الأوسط وأوروبا وخارجها."),
    ("footer.products", "المنتجات"),
    ("footer.company", "الشركة"),
    ("footer.legal", "قانوني"),
    ("footer.rights", "جميع الحقوق محفوظة."),
    // categories
    ("category.all", "جميع المنتجات"),
    ("category.hot_melt", "اللواصق الحرارية"),
    ("category.resins", "الراتنجات المشبعة"),
    ("category.pigments", "الأصباغ الصناعية"),
    // home
    ("home.hero_title", "إمدادات كيماوية يمكنك الاعتماد عليها في خطوط إنتاجك"),
    ("home.hero_subtitle", "لواصق حرارية وراتنجات مشبعة وأصباغ صناعية تصلك في موعدها من مراكز معتمدة."),
    ("home.cta_catalog", "تصفح الكتالوج"),
    ("home.cta_quote", "اطلب عرض سعر"),
    ("home.categories_title", "خطوط منتجاتنا"),
    ("home.why_title", "لماذا كيم ديست جلوبال"),
    ("home.why_quality", "نظام إدارة جودة معتمد وفق ISO 9001:2015 ووثائق ريتش كاملة."),
    ("home.why_logistics", "خدمات لوجستية مضبوطة الحرارة للمنتجات الحساسة."),
    ("home.why_delivery", "نسبة تسليم في الموعد 99.8٪ عبر شبكة التوزيع."),
    // catalog
    ("catalog.title", "كتالوج المنتجات"),
    ("catalog.meta_title", "كتالوج المنتجات - توزيع الكيماويات"),
    ("catalog.meta_description", "تصفح كتالوجنا الواسع من اللواصق الحرارية والراتنجات المشبعة والأصباغ الصناعية. صفِّ حسب الفئة والتطبيق ورقم CAS."),
    ("catalog.heading", "كتالوج الكيماويات الصناعية"),
    ("catalog.category", "الفئة"),
    ("catalog.search", "بحث"),
    ("catalog.search_placeholder", "اسم المنتج أو كلمة مفتاحية"),
    ("catalog.cas", "رقم CAS"),
    ("catalog.cas_placeholder", "مثال: 9003-07-0"),
    ("catalog.application", "التطبيق"),
    ("catalog.apply", "تطبيق الفلاتر"),
    ("catalog.clear", "مسح الكل"),
    ("catalog.results", "منتج"),
    ("catalog.empty", "لا توجد منتجات مطابقة للفلاتر."),
    ("catalog.previous", "السابق"),
    ("catalog.next", "التالي"),
    ("catalog.view_details", "عرض التفاصيل"),
    ("catalog.request_quote", "اطلب عرض سعر"),
    // product
    ("product.not_found", "المنتج غير موجود"),
    ("product.back", "العودة إلى الكتالوج"),
    ("product.overview", "نظرة عامة"),
    ("product.specifications", "المواصفات"),
    ("product.no_specifications", "المواصفات متاحة عند الطلب."),
    ("product.category", "الفئة"),
    ("product.cas", "رقم CAS"),
    ("product.application", "التطبيق"),
    ("product.packaging", "التعبئة"),
    ("product.stock", "التوفر"),
    ("product.documents", "المستندات"),
    ("product.sds", "صحيفة بيانات السلامة (SDS)"),
    ("product.coa", "شهادة التحليل (CoA)"),
    ("product.documents_note", "تُرسل مع عرض السعر عند الطلب."),
    ("product.request_quote", "اطلب عرض سعر لهذا المنتج"),
    // shared form fields
    ("form.full_name", "الاسم الكامل"),
    ("form.email", "البريد الإلكتروني للعمل"),
    ("form.company", "الشركة"),
    ("form.phone", "الهاتف"),
    ("form.required", "مطلوب"),
    ("form.invalid", "يرجى إدخال اسمك وبريد إلكتروني صالح."),
    ("form.unavailable", "خدمة الرسائل غير متاحة مؤقتاً. يرجى مراسلتنا عبر البريد الإلكتروني مباشرة."),
    // quote
    ("quote.title", "طلب عرض سعر"),
    ("quote.meta_title", "طلب عرض سعر - أسعار الكيماويات بالجملة"),
    ("quote.meta_description", "اطلب عرض سعر مخصصاً للكيماويات واللواصق والراتنجات والأصباغ بالجملة. رد خلال 24 ساعة بأسعار تنافسية وخصومات على الكميات."),
    ("quote.subtitle", "رد خلال 24 ساعة"),
    ("quote.description", "أخبرنا بما تحتاجه ووجهة الشحنة، وسيعود إليك مهندسو المبيعات بالسعر ومدة التوريد والمستندات."),
    ("quote.contact_title", "الشخص المسؤول"),
    ("quote.product_title", "تفاصيل المنتج"),
    ("quote.product", "اسم المنتج"),
    ("quote.category", "فئة المنتج"),
    ("quote.select_category", "اختر فئة"),
    ("quote.cas", "رقم CAS"),
    ("quote.application", "التطبيق"),
    ("quote.quantity", "الكمية"),
    ("quote.quantity_unit", "الوحدة"),
    ("quote.packaging", "التعبئة المفضلة"),
    ("quote.frequency", "تكرار الطلب"),
    ("quote.frequency_once", "مرة واحدة"),
    ("quote.frequency_monthly", "شهرياً"),
    ("quote.frequency_quarterly", "كل ثلاثة أشهر"),
    ("quote.delivery_title", "التسليم"),
    ("quote.delivery_date", "تاريخ التسليم المطلوب"),
    ("quote.country", "الدولة"),
    ("quote.city", "المدينة"),
    ("quote.address", "عنوان التسليم"),
    ("quote.notes", "ملاحظات إضافية"),
    ("quote.docs", "المستندات المطلوبة"),
    ("quote.doc_tds", "صحيفة البيانات الفنية (TDS)"),
    ("quote.submit", "إرسال الطلب"),
    ("quote.success", "شكراً لك. تم إرسال طلب عرض السعر وسيرد فريقنا خلال 24 ساعة."),
    ("quote.error", "تعذر إرسال طلبك. يرجى المحاولة مرة أخرى أو مراسلة sales@chemdist-global.com."),
    // contact
    ("contact.title", "اتصل بنا"),
    ("contact.meta_title", "اتصل بنا - مبيعات الكيماويات والدعم الفني"),
    ("contact.meta_description", "تواصل مع كيم ديست جلوبال للدعم الفني واستفسارات المبيعات والشحن الخاصة باللواصق والراتنجات والأصباغ."),
    ("contact.subtitle", "تحدث إلى فريقنا الفني وفريق المبيعات."),
    ("contact.inquiry", "نوع الاستفسار"),
    ("contact.inquiry_technical", "الدعم الفني"),
    ("contact.inquiry_sales", "المبيعات"),
    ("contact.inquiry_logistics", "الخدمات اللوجستية"),
    ("contact.inquiry_other", "أخرى"),
    ("contact.message", "الرسالة"),
    ("contact.submit", "إرسال الرسالة"),
    ("contact.success", "تم إرسال الرسالة بنجاح!"),
    ("contact.error", "فشل إرسال الرسالة. يرجى المحاولة مرة أخرى."),
    ("contact.sales_desk", "مكتب المبيعات"),
    ("contact.hours", "من الأحد إلى الخميس، 8:00 حتى 17:00"),
    // company
    ("company.title", "شركتنا"),
    ("company.meta_title", "عن كيم ديست جلوبال - شركة توزيع الكيماويات"),
    ("company.meta_description", "تعرف على كيم ديست جلوبال: رسالتنا وشبكة التوزيع والمعايير التي تقف وراء كل شحنة من اللواصق والراتنجات والأصباغ."),
    ("company.intro", "تربط كيم ديست جلوبال كبار منتجي الكيماويات بالمصنعين الذين يحتاجون إلى إمداد موثوق ودعم فني ووثائق مطابقة."),
    ("company.s1.title", "رسالتنا"),
    ("company.s1.body", "أن تبقى خطوط إنتاج عملائنا تعمل بالمادة الصحيحة وبالمواصفة الصحيحة وفي الموعد المتفق عليه."),
    ("company.s2.title", "القطاعات التي نخدمها"),
    ("company.s2.body", "تعتمد صناعات التغليف والطلاءات والبلاستيك والتصنيع العام على لواصقنا وراتنجاتنا وأصباغنا كل يوم."),
    ("company.s3.title", "شبكة الخدمات اللوجستية"),
    ("company.s3.body", "مراكز إقليمية بمخازن مضبوطة الحرارة تختصر مدة التوريد وتحمي المنتجات الحساسة أثناء النقل."),
    ("company.s4.title", "الجودة والامتثال"),
    ("company.s4.body", "نعمل وفق نظام جودة ISO 9001:2015 ونرفق صحيفة بيانات السلامة وشهادة التحليل مع كل شحنة."),
    // careers
    ("careers.title", "الوظائف"),
    ("careers.meta_title", "وظائف توزيع الكيماويات | وظائف في قطاع الكيماويات"),
    ("careers.meta_description", "انضم إلى فريق كيم ديست جلوبال. اكتشف الفرص في لوجستيات الكيماويات والمبيعات والعمليات والخدمات الفنية."),
    ("careers.intro", "ابنِ مسيرتك المهنية مع فريق ينقل المواد التي يعتمد عليها التصنيع الحديث."),
    ("careers.s1.title", "ثقافتنا"),
    ("careers.s1.body", "السلامة أولاً، والتعاون بين المراكز، ومجال للنمو عبر التدريب والإرشاد."),
    ("careers.s2.title", "المزايا"),
    ("careers.s2.body", "راتب تنافسي وتأمين صحي وإجازات مدفوعة وخطة تطوير واضحة لكل وظيفة."),
    ("careers.s3.title", "الوظائف الشاغرة"),
    ("careers.s3.body", "لا توجد وظائف شاغرة حالياً. أرسل سيرتك الذاتية إلى careers@chemdist-global.com وسنتواصل معك عند توفر وظيفة مناسبة."),
    // shipping
    ("shipping.title", "الشحن والتسليم"),
    ("shipping.meta_title", "الشحن والتسليم - لوجستيات المواد الخطرة"),
    ("shipping.meta_description", "كيف تشحن كيم ديست جلوبال اللواصق والراتنجات والأصباغ: الامتثال لأنظمة المواد الخطرة وضبط الحرارة والتعبئة والتتبع."),
    ("shipping.intro", "يُخطط لكل شحنة وفق متطلبات مناولة المنتج وجدول الاستلام لديك."),
    ("shipping.s1.title", "المواد الخطرة"),
    ("shipping.s1.body", "تلتزم جميع الشحنات بأنظمة DOT وIATA وIMDG واللوائح المحلية، وتُنقل المواد الخطرة في عبوات معتمدة من الأمم المتحدة."),
    ("shipping.s2.title", "التحكم في الحرارة"),
    ("shipping.s2.body", "تُشحن الكيماويات الحساسة للحرارة في حاويات مضبوطة مع تسجيل الظروف طوال المسار."),
    ("shipping.s3.title", "خيارات التعبئة"),
    ("shipping.s3.body", "أكياس وبراميل وحاويات IBC وشحنات سائبة بحسب المنتج وحجم الطلب."),
    ("shipping.s4.title", "الأضرار والمطالبات"),
    ("shipping.s4.body", "أبلغ عن أي ضرر خلال 48 ساعة على claims@chemdist-global.com، ونعمل مع شركات النقل لتسوية كل مطالبة."),
    // terms
    ("terms.title", "شروط الخدمة"),
    ("terms.meta_title", "شروط الخدمة"),
    ("terms.meta_description", "الشروط التي تحكم استخدام موقع كيم ديست جلوبال وبيع المنتجات الكيماوية."),
    ("terms.intro", "باستخدامك لخدماتنا فإنك توافق على الالتزام بشروط الخدمة هذه."),
    ("terms.s1.title", "1. بيع المنتجات الكيماوية"),
    ("terms.s1.body", "يقتصر الشراء على الجهات التجارية المؤهلة والمرخصة ذات الاستخدام المشروع، ويحق لنا التحقق من الوثائق ورفض الطلبات."),
    ("terms.s2.title", "2. معلومات المنتجات"),
    ("terms.s2.body", "المواصفات والتوفر والأسعار قابلة للتغيير، وصحائف بيانات السلامة مرجعية ولا تشكل ضماناً يتجاوز المواصفات المعلنة."),
    ("terms.s3.title", "3. الأسعار والدفع"),
    ("terms.s3.body", "عروض الأسعار سارية للمدة المذكورة فيها، وقد تنطبق حدود دنيا للطلب، وتتوفر أسعار الجملة للكميات المؤهلة."),
    ("terms.s4.title", "4. الشحن والتسليم"),
    ("terms.s4.body", "يتحمل العميل مسؤولية تأهيل مرافق الاستلام لاستقبال المواد الخطرة، وكذلك الرسوم الجمركية والضرائب."),
    ("terms.s5.title", "5. الإرجاع"),
    ("terms.s5.body", "يُقبل الإرجاع فقط في حالات عيوب التصنيع أو أخطاء الشحن، ويتطلب تصريح إرجاع مسبق."),
    ("terms.s6.title", "6. المسؤولية"),
    ("terms.s6.body", "نضمن مطابقة المنتجات للمواصفات المعلنة وقت التسليم، ولا نتحمل المسؤولية عن الأضرار غير المباشرة أو التبعية."),
    // privacy
    ("privacy.title", "سياسة الخصوصية"),
    ("privacy.meta_title", "سياسة الخصوصية"),
    ("privacy.meta_description", "كيف تجمع كيم ديست جلوبال المعلومات التي تشاركها عبر موقعنا وتستخدمها وتحميها."),
    ("privacy.intro", "نجمع فقط المعلومات اللازمة للرد على استفساراتك وإعداد عروض الأسعار."),
    ("privacy.s1.title", "المعلومات التي نجمعها"),
    ("privacy.s1.body", "بيانات التواصل ومتطلبات الطلب التي ترسلها عبر نموذجي عرض السعر والتواصل."),
    ("privacy.s2.title", "كيف نستخدمها"),
    ("privacy.s2.body", "للرد على طلبك وإعداد عروض الأسعار والوفاء بالتزامات حفظ السجلات النظامية."),
    ("privacy.s3.title", "المشاركة"),
    ("privacy.s3.body", "تُسلَّم النماذج المرسلة عبر مزود خدمة بريد إلكتروني، ولا نبيع البيانات الشخصية."),
    ("privacy.s4.title", "مدة الاحتفاظ"),
    ("privacy.s4.body", "نحتفظ بالاستفسارات طالما كان ذلك لازماً لخدمتك وبحسب ما يقتضيه القانون."),
    ("privacy.s5.title", "حقوقك"),
    ("privacy.s5.body", "يمكنك طلب نسخة من بياناتك أو تصحيحها أو حذفها بمراسلة privacy@chemdist-global.com."),
    // errors
    ("notfound.title", "الصفحة غير موجودة"),
    ("notfound.body", "الصفحة التي تبحث عنها غير موجودة."),
];
